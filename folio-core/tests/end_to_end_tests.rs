//! End-to-end tests: documents in, filtered chunk records out

use folio_core::io::{read_jsonl, write_jsonl};
use folio_core::*;
use std::io::Cursor;

fn numbered_words(n: usize) -> String {
    (0..n).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ")
}

#[test]
fn test_window_fill_default_config() {
    let config = FolioConfig::default();
    let doc = Document::new("one", vec![PageRecord::new(7, numbered_words(320))]);

    let chunks = PageChunker::new(config.chunking).unwrap().chunk(&doc);
    assert_eq!(chunks.len(), 1);
    assert_eq!((chunks[0].start_page, chunks[0].end_page), (7, 7));
    assert_eq!(chunks[0].token_count(), 320);
}

#[test]
fn test_overlap_with_default_config() {
    let doc = Document::new(
        "long",
        vec![
            PageRecord::new(1, numbered_words(300)),
            PageRecord::new(2, numbered_words(300)),
        ],
    );
    let chunks = chunk_pages(&doc, 320, 50).unwrap();
    assert_eq!(chunks.len(), 3);

    for pair in chunks.windows(2) {
        let prev: Vec<&str> = pair[0].text.split(' ').collect();
        let next: Vec<&str> = pair[1].text.split(' ').collect();
        assert_eq!(&prev[prev.len() - 50..], &next[..50]);
    }
    assert_eq!((chunks[0].start_page, chunks[0].end_page), (1, 2));
    assert_eq!(chunks[2].end_page, 2);
}

#[test]
fn test_final_flush_two_pages() {
    let doc = Document::new(
        "two",
        vec![PageRecord::new(1, numbered_words(10)), PageRecord::new(2, "tail words")],
    );
    let chunks = chunk_pages(&doc, 8, 3).unwrap();

    let last = chunks.last().unwrap();
    assert_eq!(last.end_page, 2);
    assert!(last.text.ends_with("tail words"));
}

#[test]
fn test_documents_to_token_records() {
    let input = concat!(
        r#"{"pdf_id":"p1","title":"Paper","pages":[{"page":1,"text":"Results (Smith & Jones, 2019) show the models were robust."},{"page":2,"text":null}]}"#,
        "\n",
        r#"{"pdf_id":"p2","title":"Empty","pages":[]}"#,
        "\n",
    );
    let docs: Vec<Document> = read_jsonl(Cursor::new(input)).unwrap();

    let config = FolioConfig::builder()
        .target_tokens(320)
        .overlap_tokens(50)
        .execution_mode(ExecutionMode::Sequential)
        .build()
        .unwrap();
    let output = Pipeline::from_config(&config)
        .unwrap()
        .process_documents(&docs)
        .unwrap();

    assert_eq!(output.chunks.len(), 1);
    let chunk = &output.chunks[0];
    assert_eq!(chunk.pdf_id.as_deref(), Some("p1"));
    assert_eq!((chunk.start_page, chunk.end_page), (1, 2));
    assert_eq!(
        chunk.tokens.as_deref().unwrap(),
        &["result", "show", "model", "robust"]
    );

    let mut out = Vec::new();
    write_jsonl(&mut out, &output.chunks).unwrap();
    let line = String::from_utf8(out).unwrap();
    assert!(line.starts_with(r#"{"pdf_id":"p1","start_page":1,"end_page":2,"text":"Results ( Smith & Jones , 2019 ) show"#));
    assert!(line.ends_with("\"tokens\":[\"result\",\"show\",\"model\",\"robust\"]}\n"));
}

#[test]
fn test_two_stage_matches_single_pass() {
    let docs = vec![Document::new(
        "d",
        vec![
            PageRecord::new(1, "Hyphen- ated text about neural networks."),
            PageRecord::new(2, "Contact someone@example.com or visit www.example.com today."),
        ],
    )];
    let config = FolioConfig::builder()
        .target_tokens(6)
        .overlap_tokens(2)
        .build()
        .unwrap();
    let pipeline = Pipeline::from_config(&config).unwrap();

    let single = pipeline.process_documents(&docs).unwrap().chunks;

    let mut staged = pipeline.chunk_documents(&docs).unwrap().chunks;
    pipeline.filter_chunks(&mut staged).unwrap();

    assert_eq!(single, staged);
}

#[test]
fn test_spec_lexical_filter_example() {
    let stopwords: std::collections::HashSet<&str> = ["the", "is"].into_iter().collect();
    let lexicon = Lexicon::english().unwrap();

    let tokens = filter_tokens("The CO2 level is rising quickly", &stopwords, &lexicon);
    assert_eq!(tokens, vec!["level", "rising", "quickly"]);
}

#[test]
fn test_invalid_overlap_rejected_at_build() {
    let err = FolioConfig::builder()
        .target_tokens(50)
        .overlap_tokens(50)
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        ConfigError::OverlapTooLarge {
            overlap: 50,
            target: 50
        }
    );
}
