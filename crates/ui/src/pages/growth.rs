//! Growth: product status, monthly metrics and the yearly dashboard

use dioxus::prelude::*;
use procurex_controller::Route;
use procurex_core::RecordId;
use procurex_schema::catalog::{MONTHLY_METRIC, PRODUCT_STATUS};

use crate::components::{Checkbox, CrudSection, NotificationBanner};
use crate::hooks::{UseGrowth, UseSingleton, use_crud, use_growth, use_singleton};
use crate::state::use_shell;

#[component]
pub fn GrowthPage(id: RecordId) -> Element {
    let shell = use_shell();
    let status = use_singleton(&PRODUCT_STATUS, id.clone());
    let metrics = use_crud(&MONTHLY_METRIC, Some(id.clone()));
    let growth = use_growth();
    let back = id.clone();

    rsx! {
        div {
            class: "page growth-page",

            header {
                class: "page-header",
                h1 { "Growth of product #{id}" }
                button {
                    r#type: "button",
                    class: "btn btn-secondary",
                    onclick: move |_| shell.navigate(Route::ProductDetail(back.clone())),
                    "Back to product"
                }
            }

            StatusPanel { status }

            CrudSection { crud: metrics }

            GrowthDashboardPanel { growth }
        }
    }
}

// ============================================================================
// Product Status
// ============================================================================

#[component]
fn StatusPanel(status: UseSingleton) -> Element {
    let state = status.state();
    let current = state.read();
    let schema = current.schema();
    let loading = current.is_loading();
    let saving = current.is_saving();
    let notification = current.notification().cloned();
    let flags: Vec<(&'static str, &'static str, bool)> = schema
        .fields
        .iter()
        .map(|field| (field.name, field.label, current.record().flag(field.name)))
        .collect();
    drop(current);

    rsx! {
        section {
            class: "crud-section status-panel",

            h2 { class: "section-title", "{schema.label}" }

            NotificationBanner { notification }

            if loading {
                p { class: "placeholder", "Loading..." }
            } else {
                div {
                    class: "form-fields",
                    for (name, label, checked) in flags {
                        Checkbox {
                            key: "{name}",
                            checked,
                            label: Some(label.to_string()),
                            disabled: saving,
                            on_change: move |value: bool| status.set_field(name, value.into()),
                        }
                    }
                }
                button {
                    r#type: "button",
                    class: "btn btn-primary",
                    disabled: saving,
                    onclick: move |_| status.save(),
                    if saving { "Saving..." } else { "Save Status" }
                }
            }
        }
    }
}

// ============================================================================
// Dashboard
// ============================================================================

#[component]
fn GrowthDashboardPanel(growth: UseGrowth) -> Element {
    let state = growth.state();
    let dashboard = state.read();
    let years = dashboard.years().to_vec();
    let selected = dashboard.selected();
    let series = dashboard.series().clone();
    let loading = dashboard.is_loading();
    let notification = dashboard.notification().cloned();
    drop(dashboard);

    let peak = series.peak();
    let total_revenue = format_amount(series.total_revenue);
    let total_expense = format_amount(series.total_expense);
    let net = format_amount(series.net());
    let bars: Vec<(String, String, String, f64, f64)> = series
        .labels
        .iter()
        .zip(series.revenue.iter().zip(series.expense.iter()))
        .map(|(label, (revenue, expense))| {
            (
                label.clone(),
                format_amount(*revenue),
                format_amount(*expense),
                bar_percent(*revenue, peak),
                bar_percent(*expense, peak),
            )
        })
        .collect();

    rsx! {
        section {
            class: "crud-section growth-dashboard",

            div {
                class: "section-header",
                h2 { class: "section-title", "Yearly Overview" }
                select {
                    class: "input select year-select",
                    onchange: move |e| {
                        if let Ok(year) = e.value().parse::<i32>() {
                            growth.select_year(year);
                        }
                    },
                    for year in years {
                        option {
                            key: "{year}",
                            value: "{year}",
                            selected: selected == Some(year),
                            "{year}"
                        }
                    }
                }
            }

            NotificationBanner { notification }

            if loading && series.is_empty() {
                p { class: "placeholder", "Loading..." }
            } else if series.is_empty() {
                p { class: "placeholder", "No metrics for this year" }
            } else {
                div {
                    class: "growth-totals",
                    span { class: "total revenue", "Revenue: {total_revenue}" }
                    span { class: "total expense", "Expense: {total_expense}" }
                    span { class: "total net", "Net: {net}" }
                }

                div {
                    class: "growth-chart",
                    for (label, revenue, expense, revenue_width, expense_width) in bars {
                        div {
                            key: "{label}",
                            class: "chart-row",
                            span { class: "chart-label", "{label}" }
                            div {
                                class: "chart-bars",
                                div {
                                    class: "bar bar-revenue",
                                    style: "width: {revenue_width}%",
                                    title: "{revenue}",
                                }
                                div {
                                    class: "bar bar-expense",
                                    style: "width: {expense_width}%",
                                    title: "{expense}",
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Bar width relative to the largest value, in percent
fn bar_percent(value: f64, peak: f64) -> f64 {
    if peak <= 0.0 || value <= 0.0 {
        return 0.0;
    }
    (value / peak * 100.0).min(100.0)
}

fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_percent() {
        assert_eq!(bar_percent(50.0, 200.0), 25.0);
        assert_eq!(bar_percent(200.0, 200.0), 100.0);
        assert_eq!(bar_percent(10.0, 0.0), 0.0);
        assert_eq!(bar_percent(-5.0, 100.0), 0.0);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1234.5), "1234.50");
        assert_eq!(format_amount(-20.0), "-20.00");
    }
}
