//! Card list shared by the submissions and reviews tabs

use super::state::ListView;
use crate::shared::date_utils::format_timestamp;
use crate::shared::icons::icon;
use contracts::domain::a001_order::dto::{FeedbackDto, SubmissionDto};
use leptos::prelude::*;
use thaw::*;

/// One rendered card
#[derive(Debug, Clone, PartialEq)]
pub struct RecordCard {
    pub key: String,
    pub text: String,
    pub file_url: Option<String>,
    pub timestamp: String,
}

impl RecordCard {
    /// Submissions may come without an id, the position is the fallback key
    pub fn from_submission(index: usize, submission: &SubmissionDto) -> Self {
        Self {
            key: submission
                .id
                .as_ref()
                .map(|id| id.to_string())
                .unwrap_or_else(|| format!("#{}", index)),
            text: submission.description.clone(),
            file_url: submission.file_url().map(str::to_string),
            timestamp: format_timestamp(submission.submission_date.as_deref()),
        }
    }

    pub fn from_feedback(feedback: &FeedbackDto) -> Self {
        Self {
            key: feedback.id.to_string(),
            text: feedback.feedback.clone(),
            file_url: feedback.file_url().map(str::to_string),
            timestamp: format_timestamp(feedback.created_at.as_deref()),
        }
    }
}

#[component]
pub fn RecordList(
    #[prop(into)] state: Signal<ListView>,
    #[prop(into)] cards: Signal<Vec<RecordCard>>,
    loading_text: &'static str,
    empty_text: &'static str,
) -> impl IntoView {
    view! {
        {move || match state.get() {
            ListView::Loading => view! {
                <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: var(--spacing-xl);">
                    <Spinner />
                    <span>{loading_text}</span>
                </Flex>
            }
            .into_any(),
            ListView::Empty => view! {
                <div class="record-list__empty" style="color: var(--color-text-secondary); padding: var(--spacing-lg);">
                    {empty_text}
                </div>
            }
            .into_any(),
            ListView::Items => view! {
                <div class="record-list">
                    <For
                        each=move || cards.get()
                        key=|card| card.key.clone()
                        children=|card: RecordCard| view! { <RecordCardView card=card /> }
                    />
                </div>
            }
            .into_any(),
        }}
    }
}

#[component]
fn RecordCardView(card: RecordCard) -> impl IntoView {
    view! {
        <Card>
            <p class="record-card__text" style="white-space: pre-wrap;">{card.text}</p>
            <Flex gap=FlexGap::Medium align=FlexAlign::Center style="justify-content: space-between;">
                {card.file_url.map(|url| view! {
                    <a
                        class="record-card__download"
                        href=url
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {icon("download")}
                        " Download file"
                    </a>
                })}
                <span class="record-card__date" style="color: var(--color-text-secondary);">
                    {card.timestamp}
                </span>
            </Flex>
        </Card>
    }
}
