//! Fetch fan-out against a scripted dictionary whose answers are released
//! by the test, one call at a time.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use kanal::{AsyncReceiver, AsyncSender};
use tokio::sync::oneshot;
use tokio::time::timeout;
use wordnik_client::{DictionaryApi, FetchKind, RawPayload, TransportError};
use wordnik_types::SearchPhase;

use crate::aggregator::SearchResultAggregator;
use crate::fetch::{Completion, spawn_fetches};

struct PendingCall {
    kind: FetchKind,
    word: String,
    respond: oneshot::Sender<Result<RawPayload, TransportError>>,
}

struct ScriptedApi {
    calls_tx: AsyncSender<PendingCall>,
}

impl ScriptedApi {
    async fn call(&self, kind: FetchKind, word: &str) -> Result<RawPayload, TransportError> {
        let (respond, response) = oneshot::channel();
        self.calls_tx
            .send(PendingCall {
                kind,
                word: word.to_string(),
                respond,
            })
            .await
            .expect("test dropped the call receiver");
        response.await.expect("test dropped a pending call")
    }
}

#[async_trait]
impl DictionaryApi for ScriptedApi {
    async fn fetch_synonyms(&self, word: &str) -> Result<RawPayload, TransportError> {
        self.call(FetchKind::Synonyms, word).await
    }

    async fn fetch_definition(&self, word: &str) -> Result<RawPayload, TransportError> {
        self.call(FetchKind::Definition, word).await
    }

    async fn fetch_audio(&self, word: &str) -> Result<RawPayload, TransportError> {
        self.call(FetchKind::Audio, word).await
    }
}

struct Harness {
    api: Arc<dyn DictionaryApi>,
    calls_rx: AsyncReceiver<PendingCall>,
    completion_tx: AsyncSender<Completion>,
    completion_rx: AsyncReceiver<Completion>,
    pending: Vec<PendingCall>,
}

impl Harness {
    fn new() -> Self {
        let (calls_tx, calls_rx) = kanal::unbounded_async();
        let (completion_tx, completion_rx) = kanal::unbounded_async();
        Self {
            api: Arc::new(ScriptedApi { calls_tx }),
            calls_rx,
            completion_tx,
            completion_rx,
            pending: Vec::new(),
        }
    }

    async fn collect_calls(&mut self, n: usize) {
        for _ in 0..n {
            let call = timeout(Duration::from_secs(2), self.calls_rx.recv())
                .await
                .expect("timed out waiting for a fetch")
                .unwrap();
            self.pending.push(call);
        }
    }

    /// Answer one outstanding call and hand its completion to `agg`
    async fn answer(
        &mut self,
        agg: &mut SearchResultAggregator,
        kind: FetchKind,
        word: &str,
        body: &str,
    ) -> bool {
        let pos = self
            .pending
            .iter()
            .position(|c| c.kind == kind && c.word == word)
            .expect("no such pending call");
        let call = self.pending.remove(pos);
        call.respond.send(Ok(RawPayload::ok(body))).unwrap();

        let completion = timeout(Duration::from_secs(2), self.completion_rx.recv())
            .await
            .expect("timed out waiting for a completion")
            .unwrap();
        agg.apply(completion)
    }
}

const HAPPY_SYNONYMS: &str = r#"[{"relationshipType":"synonym","words":["glad","joyful"]}]"#;
const HAPPY_DEFINITION: &str = r#"[{"text":"feeling or showing pleasure"}]"#;
const HAPPY_AUDIO: &str = r#"[{"fileUrl":"https://audio/happy.mp3"}]"#;

#[tokio::test]
async fn dispatches_three_fetches_per_submission() {
    let mut h = Harness::new();
    let mut agg = SearchResultAggregator::new();

    let ticket = agg.submit("happy").unwrap();
    spawn_fetches(h.api.clone(), &ticket, &h.completion_tx);
    h.collect_calls(3).await;

    let mut kinds: Vec<_> = h.pending.iter().map(|c| c.kind.as_str()).collect();
    kinds.sort();
    assert_eq!(kinds, vec!["audio", "definition", "synonyms"]);
    assert!(h.pending.iter().all(|c| c.word == "happy"));

    // Answer in reverse of the natural order
    assert!(h.answer(&mut agg, FetchKind::Audio, "happy", HAPPY_AUDIO).await);
    assert!(h.answer(&mut agg, FetchKind::Definition, "happy", HAPPY_DEFINITION).await);
    assert_eq!(agg.phase(), SearchPhase::Searching);
    assert!(h.answer(&mut agg, FetchKind::Synonyms, "happy", HAPPY_SYNONYMS).await);

    let view = agg.projection();
    assert_eq!(view.phase, SearchPhase::Populated);
    assert_eq!(view.synonyms, vec!["glad", "joyful"]);
    assert_eq!(view.definition_text, "feeling or showing pleasure");
    assert_eq!(view.audio_reference.as_deref(), Some("https://audio/happy.mp3"));
}

#[tokio::test]
async fn late_results_of_previous_word_are_invisible() {
    let mut h = Harness::new();
    let mut agg = SearchResultAggregator::new();

    let a = agg.submit("a").unwrap();
    spawn_fetches(h.api.clone(), &a, &h.completion_tx);
    h.collect_calls(3).await;

    let b = agg.submit("b").unwrap();
    spawn_fetches(h.api.clone(), &b, &h.completion_tx);
    h.collect_calls(3).await;

    assert!(h.answer(&mut agg, FetchKind::Synonyms, "b", r#"[{"words":["bee"]}]"#).await);
    assert!(!h.answer(&mut agg, FetchKind::Synonyms, "a", r#"[{"words":["ay"]}]"#).await);
    assert!(!h.answer(&mut agg, FetchKind::Definition, "a", r#"[{"text":"letter"}]"#).await);
    assert!(!h.answer(&mut agg, FetchKind::Audio, "a", r#"[{"fileUrl":"https://a"}]"#).await);

    let view = agg.projection();
    assert_eq!(view.query, "b");
    assert_eq!(view.synonyms, vec!["bee"]);
    assert_eq!(view.definition_text, "");
    assert_eq!(view.audio_reference, None);
}

#[tokio::test]
async fn unknown_word_error_body_resets_query() {
    let mut h = Harness::new();
    let mut agg = SearchResultAggregator::new();

    let ticket = agg.submit("xyzzy").unwrap();
    spawn_fetches(h.api.clone(), &ticket, &h.completion_tx);
    h.collect_calls(3).await;

    let not_found = r#"{"statusCode":404,"error":"Not Found","message":"Not Found"}"#;
    h.answer(&mut agg, FetchKind::Synonyms, "xyzzy", not_found).await;
    h.answer(&mut agg, FetchKind::Definition, "xyzzy", not_found).await;
    h.answer(&mut agg, FetchKind::Audio, "xyzzy", not_found).await;

    let view = agg.projection();
    assert_eq!(view.count(), 0);
    assert_eq!(view.query, "");
    assert_eq!(view.phase, SearchPhase::Populated);

    // The cleared query does not block searching the same word again
    let again = agg.submit("xyzzy").unwrap();
    spawn_fetches(h.api.clone(), &again, &h.completion_tx);
    h.collect_calls(3).await;
    assert_eq!(h.pending.len(), 3);
}

#[tokio::test]
async fn closed_completion_channel_does_not_panic() {
    let h = Harness::new();
    let mut agg = SearchResultAggregator::new();
    let Harness {
        api,
        calls_rx,
        completion_tx,
        completion_rx,
        ..
    } = h;
    drop(completion_rx);

    let ticket = agg.submit("happy").unwrap();
    let handles = spawn_fetches(api, &ticket, &completion_tx);

    for _ in 0..3 {
        let call = calls_rx.recv().await.unwrap();
        call.respond.send(Ok(RawPayload::ok("[]"))).unwrap();
    }
    for handle in handles {
        timeout(Duration::from_secs(2), handle).await.unwrap().unwrap();
    }
}
