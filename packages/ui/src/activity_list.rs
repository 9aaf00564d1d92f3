//! Activity cards with their participant lists.

use catalog::view::NO_PARTICIPANTS;
use catalog::{ActivityCard, ListView, ParticipantsView};
use dioxus::prelude::*;

use crate::icons::FaTrash;
use crate::signup::{dispatch, use_controller, use_page};
use crate::Icon;

const ACTIVITIES_CSS: Asset = asset!("/assets/styling/activities.css");

/// The `activities-list` container. Rebuilt from scratch on every load.
#[component]
pub fn ActivityList() -> Element {
    let page = use_page();
    let list = page.read().list.clone();

    rsx! {
        document::Stylesheet { href: ACTIVITIES_CSS }

        div {
            id: "activities-list",
            {match list {
                ListView::Loading => rsx! {
                    p { "Loading activities..." }
                },
                ListView::Failed(notice) => rsx! {
                    p { class: "error", "{notice}" }
                },
                ListView::Ready(cards) => rsx! {
                    for card in cards {
                        ActivityEntry { key: "{card.name}", card: card.clone() }
                    }
                },
            }}
        }
    }
}

#[component]
pub fn ActivityEntry(card: ActivityCard) -> Element {
    let controller = use_controller();

    rsx! {
        div {
            class: "activity-card",
            h4 { "{card.name}" }
            p {
                strong { "Description:" }
                " {card.description}"
            }
            p {
                strong { "Schedule:" }
                " {card.schedule}"
            }
            p {
                strong { "Capacity:" }
                " {card.capacity}"
            }
            div {
                class: "participants",
                h5 { "Current Participants:" }
                {match card.participants.clone() {
                    ParticipantsView::Empty => rsx! {
                        p { class: "no-participants", "{NO_PARTICIPANTS}" }
                    },
                    ParticipantsView::List(rows) => rsx! {
                        ul {
                            for row in rows {
                                li {
                                    key: "{row.email}",
                                    span { class: "participant-email", "{row.email}" }
                                    if let Some(event) = row.remove.clone() {
                                        button {
                                            class: "delete-btn",
                                            title: "Unregister {row.email}",
                                            onclick: {
                                                let controller = controller.clone();
                                                move |_| dispatch(&controller, event.clone())
                                            },
                                            Icon { icon: FaTrash, width: 14, height: 14 }
                                        }
                                    }
                                }
                            }
                        }
                    },
                }}
            }
        }
    }
}
