//! Form, table and notification for one workflow

use dioxus::prelude::*;
use procurex_core::RecordId;

use crate::components::entity_form::EntityForm;
use crate::components::entity_table::EntityTable;
use crate::components::notification::NotificationBanner;
use crate::hooks::UseCrud;

#[derive(Props, Clone, PartialEq)]
pub struct CrudSectionProps {
    pub crud: UseCrud,

    #[props(default)]
    pub on_open: Option<EventHandler<RecordId>>,
}

#[component]
pub fn CrudSection(props: CrudSectionProps) -> Element {
    let crud = props.crud;
    let state = crud.state();
    let notification = state.read().notification().cloned();
    let heading = crud.schema().plural_label;

    rsx! {
        section {
            class: "crud-section",

            h2 { class: "section-title", "{heading}" }

            NotificationBanner {
                notification,
                on_dismiss: move |_| crud.dismiss_notification(),
            }

            EntityForm { crud }

            EntityTable { crud, on_open: props.on_open }
        }
    }
}
