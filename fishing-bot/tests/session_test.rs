//! Session flow tests with a mock spot finder: one user + one bot message per
//! accepted submission, blank/in-flight rejection, flag cleared on both branches.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use chat_core::{Coordinates, GroundingLink, HistoryEntry, Role, GREETING};
use fishing_bot::{ChatSession, SubmitOutcome, FALLBACK_ERROR_MESSAGE};
use spot_finder::{SpotFinder, SpotReport};

/// Mock finder: optional canned reply, optional failure, records inputs.
struct MockFinder {
    reply: Option<SpotReport>,
    calls: AtomicUsize,
    last_history: Mutex<Vec<HistoryEntry>>,
    last_location: Mutex<Option<Coordinates>>,
}

impl MockFinder {
    fn answering(text: &str, links: Vec<GroundingLink>) -> Self {
        Self {
            reply: Some(SpotReport {
                text: text.to_string(),
                links,
                verified_catches: Vec::new(),
            }),
            calls: AtomicUsize::new(0),
            last_history: Mutex::new(Vec::new()),
            last_location: Mutex::new(None),
        }
    }

    fn failing() -> Self {
        Self {
            reply: None,
            calls: AtomicUsize::new(0),
            last_history: Mutex::new(Vec::new()),
            last_location: Mutex::new(None),
        }
    }
}

#[async_trait]
impl SpotFinder for MockFinder {
    async fn find_spots(
        &self,
        _prompt: &str,
        history: &[HistoryEntry],
        location: Option<Coordinates>,
    ) -> Result<SpotReport> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_history.lock().unwrap() = history.to_vec();
        *self.last_location.lock().unwrap() = location;
        match &self.reply {
            Some(report) => Ok(report.clone()),
            None => anyhow::bail!("scraper backend offline"),
        }
    }
}

#[tokio::test]
async fn accepted_submission_appends_one_user_then_one_bot_message() {
    let finder = Arc::new(MockFinder::answering("Two catches found.", Vec::new()));
    let mut session = ChatSession::new(finder.clone(), None);

    let before = session.conversation().messages().len();
    let outcome = session.submit("any trout nearby?").await;

    assert_eq!(outcome, SubmitOutcome::Answered);
    let messages = session.conversation().messages();
    assert_eq!(messages.len(), before + 2);
    assert_eq!(messages[before].role, Role::User);
    assert_eq!(messages[before].content, "any trout nearby?");
    assert_eq!(messages[before + 1].role, Role::Bot);
    assert_eq!(messages[before + 1].content, "Two catches found.");
    assert_eq!(finder.calls.load(Ordering::SeqCst), 1);
    assert!(!session.conversation().awaiting_response());
}

#[tokio::test]
async fn blank_submission_changes_nothing() {
    let finder = Arc::new(MockFinder::answering("unused", Vec::new()));
    let mut session = ChatSession::new(finder.clone(), None);

    let before = session.conversation().messages().len();
    assert_eq!(session.submit("").await, SubmitOutcome::Rejected);
    assert_eq!(session.submit("   \t ").await, SubmitOutcome::Rejected);

    assert_eq!(session.conversation().messages().len(), before);
    assert_eq!(finder.calls.load(Ordering::SeqCst), 0);
    assert!(!session.conversation().awaiting_response());
}

#[tokio::test]
async fn failure_appends_fallback_and_clears_flag() {
    let finder = Arc::new(MockFinder::failing());
    let mut session = ChatSession::new(finder, None);

    let outcome = session.submit("any bass?").await;

    assert_eq!(outcome, SubmitOutcome::Failed);
    let last = session.conversation().messages().last().unwrap();
    assert_eq!(last.role, Role::Bot);
    assert_eq!(last.content, FALLBACK_ERROR_MESSAGE);
    assert!(last.grounding_links.is_empty());
    assert!(!session.conversation().awaiting_response());
}

#[tokio::test]
async fn finder_sees_prior_history_not_the_current_prompt() {
    let finder = Arc::new(MockFinder::answering("ok", Vec::new()));
    let mut session = ChatSession::new(finder.clone(), None);

    session.submit("first question").await;
    session.submit("second question").await;

    let history = finder.last_history.lock().unwrap().clone();
    // greeting + first question + first reply; the second question travels as the prompt
    assert_eq!(history.len(), 3);
    assert_eq!(history[0].text, GREETING);
    assert_eq!(history[1].text, "first question");
    assert_eq!(history[2].text, "ok");
    assert!(history.iter().all(|h| h.text != "second question"));
}

#[tokio::test]
async fn resolved_location_is_passed_through_unchanged() {
    let finder = Arc::new(MockFinder::answering("ok", Vec::new()));
    let coords = Coordinates {
        latitude: 34.05,
        longitude: -118.25,
    };
    let mut session = ChatSession::new(finder.clone(), Some(coords));

    session.submit("anything biting?").await;

    assert_eq!(*finder.last_location.lock().unwrap(), Some(coords));
    assert_eq!(session.location(), Some(coords));
}

#[tokio::test]
async fn links_from_the_report_land_on_the_bot_message() {
    let links = vec![
        GroundingLink {
            title: "Pier 7".to_string(),
            uri: "https://maps.example/1".to_string(),
        },
        GroundingLink {
            title: "Social Catch Source".to_string(),
            uri: "https://social.example/2".to_string(),
        },
    ];
    let finder = Arc::new(MockFinder::answering("Found them.", links.clone()));
    let mut session = ChatSession::new(finder, None);

    session.submit("bass posts?").await;

    let last = session.conversation().messages().last().unwrap();
    assert_eq!(last.grounding_links, links);
}
