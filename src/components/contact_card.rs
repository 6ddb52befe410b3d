//! Contact Card Component
//!
//! One contact with its four capped sections. All text goes in as text
//! nodes, so names and notes are never interpreted as markup.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::format::{format_date, format_eur};
use crate::labels::{self, hidden_badge, Gender};
use crate::render::{opportunity_badge_value, CardView};

#[component]
pub fn ContactCard(card: CardView) -> impl IntoView {
    let ctx = use_app_context();
    let CardView {
        id,
        name,
        position,
        email,
        company,
        expanded,
        events,
        notes,
        actions,
        opportunities,
    } = card;

    let (toggle_title, toggle_icon) = if expanded {
        (labels::VIEW_SUMMARY, "🔼")
    } else {
        (labels::VIEW_FULL, "🔽")
    };

    let toggle_id = id.clone();
    let edit_id = id.clone();
    let delete_id = id.clone();

    view! {
        <div class="contact-card" data-id=id>
            <div class="contact-header">
                <div>
                    <h3>{name}</h3>
                    <p class="contact-position">{position.unwrap_or_default()}</p>
                </div>
                <div class="contact-actions">
                    <button
                        class="btn-icon"
                        title=toggle_title
                        on:click=move |_| ctx.with(|manager| manager.toggle_card_view(&toggle_id))
                    >
                        {toggle_icon}
                    </button>
                    <button
                        class="btn-icon"
                        title=labels::EDIT
                        on:click=move |_| {
                            let id = edit_id.clone();
                            ctx.spawn(move |manager| async move {
                                manager.edit_contact(&id).await;
                            });
                        }
                    >
                        "✏️"
                    </button>
                    <button
                        class="btn-icon"
                        title=labels::DELETE
                        on:click=move |_| {
                            let id = delete_id.clone();
                            ctx.spawn(move |manager| async move {
                                manager.delete_contact(&id).await;
                            });
                        }
                    >
                        "🗑️"
                    </button>
                </div>
            </div>

            <div class="contact-info">
                {email.map(|email| view! { <p><strong>"📧"</strong> " " {email}</p> })}
                {company.map(|company| view! { <p><strong>"🏢"</strong> " " {company}</p> })}
            </div>

            {events.map(|section| view! {
                <CardSection title=labels::SECTION_EVENTS hidden=section.hidden gender=Gender::Masculine>
                    {section.entries.into_iter().map(|event| view! {
                        <div class="section-entry">
                            <span class="badge badge-primary">{event.kind}</span>
                            " "
                            <span class="entry-date">{format_date(&event.date)}</span>
                            <p class="entry-text">{event.notes}</p>
                        </div>
                    }).collect_view()}
                </CardSection>
            })}

            {notes.map(|section| view! {
                <CardSection title=labels::SECTION_NOTES hidden=section.hidden gender=Gender::Feminine>
                    {section.entries.into_iter().map(|note| view! {
                        <p class="entry-text">"• " {note}</p>
                    }).collect_view()}
                </CardSection>
            })}

            {actions.map(|section| view! {
                <CardSection title=labels::SECTION_ACTIONS hidden=section.hidden gender=Gender::Feminine>
                    {section.entries.into_iter().map(|action| view! {
                        <div class="section-entry">
                            <span class="badge badge-warning">{format_date(&action.due_date)}</span>
                            <p class="entry-text">{action.action}</p>
                        </div>
                    }).collect_view()}
                </CardSection>
            })}

            {opportunities.map(|section| view! {
                <CardSection title=labels::SECTION_OPPORTUNITIES hidden=section.hidden gender=Gender::Feminine>
                    {section.entries.into_iter().map(|opportunity| {
                        let badge = opportunity_badge_value(&opportunity);
                        view! {
                            <div class="section-entry">
                                <p class="entry-text"><strong>{opportunity.project}</strong></p>
                                {badge.map(|value| view! {
                                    <span class="badge badge-success">{format_eur(value)}</span>
                                })}
                            </div>
                        }
                    }).collect_view()}
                </CardSection>
            })}
        </div>
    }
}

/// Section heading with the hidden-entries badge when collapsed
#[component]
fn CardSection(
    title: &'static str,
    hidden: usize,
    gender: Gender,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="contact-section">
            <h4>
                {title}
                {(hidden > 0).then(|| view! {
                    " "
                    <span class="hidden-count">{hidden_badge(hidden, gender)}</span>
                })}
            </h4>
            {children()}
        </div>
    }
}
