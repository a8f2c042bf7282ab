//! Yearly revenue and expense dashboard

use procurex_client::MonthlyEntry;
use procurex_core::ConsoleResult;

use crate::notification::Notification;
use crate::op::{OpState, Ticket, TicketCounter};

/// Chart-ready series for one year
///
/// Points keep the order the server sent them in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GrowthSeries {
    pub labels: Vec<String>,
    pub revenue: Vec<f64>,
    pub expense: Vec<f64>,
    pub total_revenue: f64,
    pub total_expense: f64,
}

impl GrowthSeries {
    pub fn from_entries(entries: &[MonthlyEntry]) -> Self {
        let mut series = Self::default();
        for entry in entries {
            series.labels.push(entry.month.clone());
            series.revenue.push(entry.revenue_amount);
            series.expense.push(entry.spent_amount);
            series.total_revenue += entry.revenue_amount;
            series.total_expense += entry.spent_amount;
        }
        series
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Revenue minus expense
    pub fn net(&self) -> f64 {
        self.total_revenue - self.total_expense
    }

    /// Largest value across both series, for scaling bars
    pub fn peak(&self) -> f64 {
        self.revenue
            .iter()
            .chain(self.expense.iter())
            .copied()
            .fold(0.0, f64::max)
    }
}

/// Year picker plus the series of the selected year
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GrowthDashboard {
    years: Vec<i32>,
    selected: Option<i32>,
    series: GrowthSeries,
    notification: Option<Notification>,
    years_op: OpState,
    series_op: OpState,
    tickets: TicketCounter,
}

impl GrowthDashboard {
    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn selected(&self) -> Option<i32> {
        self.selected
    }

    pub fn series(&self) -> &GrowthSeries {
        &self.series
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.years_op.is_pending() || self.series_op.is_pending()
    }

    pub fn begin_years(&mut self) -> Ticket {
        let ticket = self.tickets.issue();
        self.years_op = OpState::Pending(ticket);
        ticket
    }

    pub fn complete_years(&mut self, ticket: Ticket, result: ConsoleResult<Vec<i32>>) {
        if !self.years_op.awaits(ticket) {
            return;
        }
        self.years_op.settle(&result);
        match result {
            Ok(years) => self.years = years,
            Err(err) => {
                self.notification = Some(Notification::failure("loading", "year options", &err))
            }
        }
    }

    /// Pick a year; returns the ticket for fetching its metrics
    pub fn select_year(&mut self, year: i32) -> Ticket {
        self.selected = Some(year);
        self.series = GrowthSeries::default();
        let ticket = self.tickets.issue();
        self.series_op = OpState::Pending(ticket);
        ticket
    }

    pub fn complete_series(&mut self, ticket: Ticket, result: ConsoleResult<Vec<MonthlyEntry>>) {
        if !self.series_op.awaits(ticket) {
            return;
        }
        self.series_op.settle(&result);
        match result {
            Ok(entries) => self.series = GrowthSeries::from_entries(&entries),
            Err(err) => {
                self.notification = Some(Notification::failure("loading", "monthly metrics", &err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use procurex_core::ConsoleError;

    fn entry(month: &str, revenue: f64, spent: f64) -> MonthlyEntry {
        MonthlyEntry {
            month: month.to_string(),
            revenue_amount: revenue,
            spent_amount: spent,
        }
    }

    #[test]
    fn test_series_keeps_server_order_and_totals() {
        let series = GrowthSeries::from_entries(&[
            entry("March", 300.0, 100.0),
            entry("January", 50.0, 20.5),
        ]);
        assert_eq!(series.labels, vec!["March", "January"]);
        assert_eq!(series.revenue, vec![300.0, 50.0]);
        assert_eq!(series.expense, vec![100.0, 20.5]);
        assert_eq!(series.total_revenue, 350.0);
        assert_eq!(series.total_expense, 120.5);
        assert_eq!(series.net(), 229.5);
        assert_eq!(series.peak(), 300.0);
    }

    #[test]
    fn test_selecting_a_new_year_drops_old_response() {
        let mut dashboard = GrowthDashboard::default();
        let years = dashboard.begin_years();
        dashboard.complete_years(years, Ok(vec![2024, 2023]));
        assert_eq!(dashboard.years(), &[2024, 2023]);

        let old = dashboard.select_year(2024);
        let new = dashboard.select_year(2023);
        dashboard.complete_series(old, Ok(vec![entry("May", 1.0, 1.0)]));
        assert!(dashboard.series().is_empty());
        assert!(dashboard.is_loading());

        dashboard.complete_series(new, Ok(vec![entry("June", 2.0, 1.0)]));
        assert_eq!(dashboard.selected(), Some(2023));
        assert_eq!(dashboard.series().labels, vec!["June"]);
        assert!(!dashboard.is_loading());
    }

    #[test]
    fn test_failure_sets_notification() {
        let mut dashboard = GrowthDashboard::default();
        let ticket = dashboard.begin_years();
        dashboard.complete_years(ticket, Err(ConsoleError::network("offline")));
        assert!(dashboard.notification().unwrap().is_error());
        assert!(dashboard.years().is_empty());
    }
}
