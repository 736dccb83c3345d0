use site::{t, ContactDraft, Lang, Localizer, Navigator, Page, SubmissionSimulator, SubmissionStatus};
use std::time::Duration;

#[test]
fn navigate_to_contact_then_switch_language() {
    let mut nav = Navigator::new();
    let mut loc = Localizer::default();
    assert_eq!(nav.current(), Page::Home);

    nav.navigate(Page::Contact);
    assert_eq!(nav.current(), Page::Contact);
    assert_eq!(loc.translate("contact.title"), "Get Started Today");

    loc.set_language(Lang::Fr);
    assert_eq!(loc.translate("contact.title"), "Commencez dès aujourd'hui");
    assert_eq!(nav.current(), Page::Contact);
}

#[test]
fn nonexistent_key_comes_back_literally() {
    assert_eq!(t(Lang::En, "nonexistent.key"), "nonexistent.key");
    assert_eq!(Localizer::new(Lang::Fr).translate("nonexistent.key"), "nonexistent.key");
}

#[test]
fn navbar_labels_follow_the_language() {
    let labels = |lang: Lang| -> Vec<String> { Page::ALL.iter().map(|p| t(lang, p.nav_key())).collect() };
    assert_eq!(labels(Lang::En), ["Home", "About Us", "Services", "Workshops", "Contact"]);
    assert_eq!(labels(Lang::Fr), ["Accueil", "À propos", "Services", "Ateliers", "Contact"]);
}

#[tokio::test(start_paused = true)]
async fn complete_draft_goes_idle_submitting_submitted_after_delay() {
    let draft = ContactDraft {
        name: "Robert Gagnon".into(),
        email: "robert@example.com".into(),
        phone: "(514) 555-0199".into(),
        preferred_language: Lang::En,
        needs: "Video calls with my grandchildren".into(),
    };
    let simulator = SubmissionSimulator::new(Duration::from_millis(1500));
    let started = tokio::time::Instant::now();

    let mut seen = vec![SubmissionStatus::Idle];
    let mut reached_at = Vec::new();
    let done = simulator
        .submit(SubmissionStatus::Idle, &draft, tokio::time::sleep, |status| {
            seen.push(status);
            reached_at.push(started.elapsed());
        })
        .await
        .unwrap();

    assert_eq!(done, SubmissionStatus::Submitted);
    assert_eq!(
        seen,
        [SubmissionStatus::Idle, SubmissionStatus::Submitting, SubmissionStatus::Submitted]
    );
    assert_eq!(reached_at[0], Duration::ZERO);
    assert!(reached_at[1] >= Duration::from_millis(1500));
}

#[tokio::test(start_paused = true)]
async fn submitted_form_cannot_be_resubmitted() {
    let draft = ContactDraft {
        name: "A".into(),
        email: "a@example.com".into(),
        needs: "Help".into(),
        ..ContactDraft::default()
    };
    let res = SubmissionSimulator::default()
        .submit(SubmissionStatus::Submitted, &draft, tokio::time::sleep, |_| {})
        .await;
    assert!(res.is_err());
}
