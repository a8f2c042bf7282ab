//! Yearly metrics dashboard hook

use dioxus::prelude::*;
use procurex_client::MetricsClient;
use procurex_controller::GrowthDashboard;

use super::settle;
use crate::state::use_shell;

#[derive(Clone, Copy, PartialEq)]
pub struct UseGrowth {
    state: Signal<GrowthDashboard>,
    client: Signal<MetricsClient>,
}

/// Load the year options, then the series of the first year offered
pub fn use_growth() -> UseGrowth {
    let shell = use_shell();
    let state = use_signal(GrowthDashboard::default);
    let client = use_signal(|| MetricsClient::new(shell.api()));
    let growth = UseGrowth { state, client };

    use_hook(|| growth.load_years());

    growth
}

impl UseGrowth {
    pub fn state(&self) -> Signal<GrowthDashboard> {
        self.state
    }

    fn load_years(&self) {
        let mut state = self.state;
        let client = self.client.cloned();
        let ticket = state.write().begin_years();
        let growth = *self;

        spawn(async move {
            let result = client.year_options().await;
            let first = result.as_ref().ok().and_then(|years| years.first().copied());
            settle(state, "Year options", |s| {
                s.complete_years(ticket, result);
                Ok(())
            });
            if let Some(year) = first {
                if state.try_read().is_ok() {
                    growth.select_year(year);
                }
            }
        });
    }

    pub fn select_year(&self, year: i32) {
        let mut state = self.state;
        let client = self.client.cloned();
        let ticket = state.write().select_year(year);

        spawn(async move {
            let result = client.monthly_metrics(year).await;
            settle(state, "Monthly metrics", |s| {
                s.complete_series(ticket, result);
                Ok(())
            });
        });
    }
}
