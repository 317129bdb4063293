//! Feedback form and list for the store page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The list is fetched once the session has been read from storage, and again
//! after every successful submission. Failures never escape the panel: submit
//! errors become notifications and load errors render an inline placeholder.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use crate::actions::prepare_feedback;
use crate::components::action_button::ActionButton;
use crate::components::animated_counter::AnimatedCounter;
use crate::net::types::Feedback;
use crate::state::auth::AuthState;
use crate::state::feedback::{
    FeedbackList, FeedbackState, avatar_color, char_count, char_count_color, date_label, display_username, local_offset,
};
use crate::state::notify::{NotificationState, notify};
use crate::state::session::avatar_initial;

/// Upper bound on feedback length enforced by the text box.
pub const FEEDBACK_MAX_CHARS: usize = 500;

#[component]
pub fn FeedbackPanel() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let feedback = RwSignal::new(FeedbackState::default());

    let requested = StoredValue::new(false);
    Effect::new(move || {
        if !auth.with(|a| a.loaded) || requested.get_value() {
            return;
        }
        requested.set_value(true);
        reload(feedback, auth);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if feedback.with_untracked(|f| f.submitting) {
            return;
        }
        let draft = feedback.with_untracked(|f| f.draft.clone());
        let prepared = auth.with_untracked(|a| prepare_feedback(&draft, &a.session));
        let draft = match prepared {
            Ok(draft) => draft,
            Err(report) => {
                notify(notifications, report.kind, report.message);
                return;
            }
        };
        feedback.update(|f| f.submitting = true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = crate::net::api::HttpApi::default();
            let report = crate::actions::submit_feedback(&api, &draft).await;
            let succeeded = report.is_success();
            notify(notifications, report.kind, report.message);
            feedback.update(|f| {
                f.submitting = false;
                if succeeded {
                    f.draft.clear();
                }
            });
            if succeeded {
                reload(feedback, auth);
            }
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = draft;
            feedback.update(|f| f.submitting = false);
        }
    };

    let count = Signal::derive(move || feedback.with(|f| f.list.count()));
    let draft_len = move || feedback.with(|f| char_count(&f.draft));
    let submitting = Signal::derive(move || feedback.with(|f| f.submitting));

    view! {
        <section class="feedback-section">
            <div class="feedback-section__header">
                <h2>"Student Feedback"</h2>
                <span class="feedback-section__count">
                    <AnimatedCounter target=count id="feedback-count"/>
                    " feedbacks"
                </span>
            </div>
            <form class="feedback-form" on:submit=on_submit>
                <textarea
                    id="feedback-text"
                    class="feedback-input"
                    placeholder="Share your thoughts about our products and service..."
                    maxlength=FEEDBACK_MAX_CHARS.to_string()
                    prop:value=move || feedback.with(|f| f.draft.clone())
                    on:input=move |ev| feedback.update(|f| f.draft = event_target_value(&ev))
                ></textarea>
                <div class="feedback-form__footer">
                    <span class="char-counter">
                        <span id="char-counter" style=move || format!("color: {};", char_count_color(draft_len()))>
                            {draft_len}
                        </span>
                        {format!("/{FEEDBACK_MAX_CHARS}")}
                    </span>
                    <ActionButton
                        label="Submit Feedback"
                        loading_label="Submitting..."
                        icon="fas fa-paper-plane"
                        loading=submitting
                    />
                </div>
            </form>
            <div class="feedback-list" id="feedback-list">
                {move || feedback.with(|f| render_list(&f.list, auth))}
            </div>
        </section>
    }
}

fn render_list(list: &FeedbackList, auth: RwSignal<AuthState>) -> AnyView {
    match list {
        FeedbackList::Loading => view! {
            <div class="no-feedback">
                <i class="fas fa-spinner fa-spin"></i>
                <p>"Loading feedbacks..."</p>
            </div>
        }
        .into_any(),
        FeedbackList::Failed => view! {
            <div class="no-feedback">
                <i class="fas fa-exclamation-circle"></i>
                <h4>"Failed to load feedbacks"</h4>
                <p>"Please try again later"</p>
            </div>
        }
        .into_any(),
        FeedbackList::Loaded(items) if items.is_empty() => view! {
            <div class="no-feedback">
                <i class="fas fa-comment-slash"></i>
                <h4>"No feedbacks yet"</h4>
                <p>"Be the first to share your thoughts!"</p>
            </div>
        }
        .into_any(),
        FeedbackList::Loaded(items) => items
            .iter()
            .map(|item| auth.with_untracked(|a| feedback_item(item, display_username(item, &a.session))))
            .collect_view()
            .into_any(),
    }
}

fn feedback_item(item: &Feedback, username: &str) -> AnyView {
    let avatar_style = format!("background: {};", avatar_color(username));
    let initial = avatar_initial(username);
    let username = username.to_owned();
    let date = date_label(item.created_at.as_deref(), local_offset());
    let message = item.message.clone();

    view! {
        <div class="feedback-item">
            <div class="feedback-meta">
                <div class="feedback-user">
                    <div class="feedback-avatar" style=avatar_style>{initial}</div>
                    <div>
                        <strong>{username}</strong>
                        <div class="feedback-date">
                            <i class="far fa-clock"></i>
                            " "
                            {date}
                        </div>
                    </div>
                </div>
                <div class="feedback-rating">
                    <i class="fas fa-star"></i>
                    <i class="fas fa-star"></i>
                    <i class="fas fa-star"></i>
                    <i class="fas fa-star"></i>
                    <i class="fas fa-star-half-alt"></i>
                </div>
            </div>
            <div class="feedback-content">
                <i class="fas fa-quote-left"></i>
                " "
                {message}
                " "
                <i class="fas fa-quote-right"></i>
            </div>
        </div>
    }
    .into_any()
}

/// Fetch the list in the background and store the result.
fn reload(feedback: RwSignal<FeedbackState>, auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let session = auth.with_untracked(|a| a.session.clone());
        let list = crate::actions::load_feedback(&crate::net::api::HttpApi::default(), &session).await;
        feedback.try_update(|f| f.list = list);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (feedback, auth);
    }
}
