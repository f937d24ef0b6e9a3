use tfidf_retrieval::{DocRef, Document, EngineConfig, IdOrder, RetrievalError, TFIDF};
use tracing_subscriber::{fmt, EnvFilter};

fn init_tracing() {
    let _ = fmt().with_env_filter(EnvFilter::from_default_env()).with_test_writer().try_init();
}

fn animals() -> Vec<Document> {
    vec![
        Document::new("A", vec!["cat", "cat", "dog"], vec![]),
        Document::new("B", vec!["dog", "dog", "mouse"], vec![]),
        Document::new("C", vec!["cat", "mouse", "mouse"], vec![]),
    ]
}

fn news() -> Vec<Document> {
    vec![
        Document::from_sentences(
            "markets",
            vec![
                vec!["stocks", "rallied", "as", "the", "market", "opened"],
                vec!["the", "index", "closed", "higher"],
                vec!["bond", "yields", "fell"],
            ],
        ),
        Document::from_sentences(
            "weather",
            vec![
                vec!["rain", "is", "expected", "in", "the", "north"],
                vec!["the", "south", "stays", "dry"],
            ],
        ),
        Document::from_sentences(
            "sports",
            vec![
                vec!["the", "team", "won", "the", "final"],
                vec!["fans", "filled", "the", "stadium"],
            ],
        ),
        Document::from_sentences(
            "markets2",
            vec![vec!["the", "market", "index", "fell"], vec!["stocks", "slid"]],
        ),
    ]
}

#[test]
fn animal_corpus_end_to_end() {
    init_tracing();
    let engine = TFIDF::new(&animals()).unwrap();
    assert_eq!(engine.keywords(1, DocRef::Name("A")).unwrap(), vec!["cat"]);
    assert_eq!(engine.search_docs(&["cat"], 3), vec!["A", "C", "B"]);
}

#[test]
fn matrix_columns_sum_to_document_length() {
    let corpus = news();
    let engine = TFIDF::new(&corpus).unwrap();
    for doc in &corpus {
        let col = engine.documents().to_id(doc.name()).unwrap();
        let sum: u64 = engine.matrix().column(col).map(u64::from).sum();
        assert_eq!(sum, doc.token_count() as u64);
    }
}

#[test]
fn loose_name_or_doc_shape_is_validated() {
    let engine = TFIDF::new(&animals()).unwrap();
    let doc = Document::new("x", vec!["cat"], vec![]);
    let err = DocRef::from_options(Some("A"), Some(&doc)).unwrap_err();
    assert!(matches!(err, RetrievalError::InvalidArgument(_)));

    let target = DocRef::from_options(Some("A"), None).unwrap();
    assert_eq!(engine.keywords(1, target).unwrap(), vec!["cat"]);
}

#[test]
fn similar_news_stays_on_topic() {
    let engine = TFIDF::new(&news()).unwrap();
    let similar = engine.similar_docs(2, 5, DocRef::Name("markets")).unwrap();
    assert_eq!(similar, vec!["markets", "markets2"]);
}

#[test]
fn summary_of_ad_hoc_article() {
    let engine = TFIDF::new(&news()).unwrap();
    let article = Document::from_sentences(
        "article",
        vec![
            vec!["the", "stadium", "was", "full"],
            vec!["rain", "stopped", "play"],
        ],
    );
    let summary = engine.summarize(2, DocRef::Doc(&article)).unwrap();
    assert_eq!(summary.len(), 2);
    assert!(summary.contains(&"the stadium was full".to_string()));
    assert!(summary.contains(&"rain stopped play".to_string()));
}

#[test]
fn empty_corpus_cannot_build() {
    let err = TFIDF::new(&[]).unwrap_err();
    assert_eq!(err, RetrievalError::EmptyCorpus);
}

#[test]
fn id_order_only_changes_tie_order() {
    let corpus = vec![
        Document::new("zeta", vec!["x"], vec![]),
        Document::new("alpha", vec!["x"], vec![]),
        Document::new("mid", vec!["y"], vec![]),
    ];
    let sorted = TFIDF::new(&corpus).unwrap();
    let config = EngineConfig::default().with_id_order(IdOrder::FirstSeen);
    let seen: TFIDF = TFIDF::with_config(&corpus, config).unwrap();
    assert_eq!(sorted.search_docs(&["x"], 2), vec!["alpha", "zeta"]);
    assert_eq!(seen.search_docs(&["x"], 2), vec!["zeta", "alpha"]);
}

#[test]
fn corpus_loads_from_json() {
    let raw = r#"[
        {"name": "a", "words": ["red", "apple"], "sentences": [["red", "apple"]]},
        {"name": "b", "words": ["green", "pear"]}
    ]"#;
    let corpus: Vec<Document> = serde_json::from_str(raw).unwrap();
    let engine = TFIDF::new(&corpus).unwrap();
    assert_eq!(engine.search_docs(&["pear"], 1), vec!["b"]);
}
