// File-to-records pipeline: load glossary, read input, tokenize, extract
use glossmatch::reader::{self, GlossaryReader, ReaderConfig};
use glossmatch::{Extraction, ExtractorConfig, GlossaryExtractor, WhitespaceTokenizer};

#[path = "integration/fixtures/mod.rs"]
mod fixtures;
use fixtures::*;

#[path = "integration/mod.rs"]
mod test_utils;
use test_utils::{assert_golden_file, format_extractions, TestFixture};

/// Test complete pipeline with a line-based glossary
#[tokio::test]
async fn test_pipeline_line_glossary() {
    let fixture = TestFixture::new();
    let glossary_path = fixture.create_glossary("cities.txt", CITY_GLOSSARY);
    let input_path = fixture.create_file("trip.txt", CITY_TEXT);

    let terms = reader::load_glossary(&glossary_path).await
        .expect("Glossary loading should succeed");
    assert_eq!(terms.len(), CITY_GLOSSARY.len());

    let content = reader::read_input(&input_path).await
        .expect("Input reading should succeed");

    let tokenizer = WhitespaceTokenizer::new();
    let config = ExtractorConfig::new("cities").with_ngrams(3);
    let extractor = GlossaryExtractor::new(&terms, config, &tokenizer)
        .expect("Extractor creation should succeed");
    let results = extractor.try_extract(&tokenizer.tokens(&content))
        .expect("Extraction should succeed");

    assert_golden_file(&format_extractions(&results), CITY_EXPECTED, "Line glossary pipeline");
}

/// Test pipeline with a JSON glossary and multi-line input
#[tokio::test]
async fn test_pipeline_json_glossary_multiline_input() {
    let fixture = TestFixture::new();
    let glossary_path = fixture.create_file(
        "terms.json",
        r#"["machine learning", "deep learning", "learning"]"#,
    );
    let input_path = fixture.create_file(
        "notes.txt",
        "Deep\nlearning is a kind of\r\nmachine   learning.",
    );

    let terms = reader::load_glossary(&glossary_path).await.unwrap();
    let content = reader::read_input(&input_path).await.unwrap();

    let tokenizer = WhitespaceTokenizer::new();
    let extractor = GlossaryExtractor::new(&terms, ExtractorConfig::default(), &tokenizer).unwrap();
    let results = extractor.extract(&tokenizer.tokens(&content));

    // "learning." keeps its period, so only the first occurrence matches alone
    assert_eq!(
        results,
        vec![
            Extraction::from_match("learning", 1, 2),
            Extraction::from_match("deep learning", 0, 2),
        ]
    );
}

/// Test pipeline with an empty input file
#[tokio::test]
async fn test_pipeline_empty_input() {
    let fixture = TestFixture::new();
    let glossary_path = fixture.create_glossary("cities.txt", CITY_GLOSSARY);
    let input_path = fixture.create_file("empty.txt", "");

    let terms = reader::load_glossary(&glossary_path).await.unwrap();
    let content = reader::read_input(&input_path).await.unwrap();

    let tokenizer = WhitespaceTokenizer::new();
    let extractor = GlossaryExtractor::new(&terms, ExtractorConfig::default(), &tokenizer).unwrap();
    assert!(extractor.try_extract(&tokenizer.tokens(&content)).unwrap().is_empty());
}

/// Test batch reading keeps going past unreadable inputs
#[tokio::test]
async fn test_pipeline_batch_with_missing_input() {
    let fixture = TestFixture::new();
    let present = fixture.create_file("a.txt", "to Los Angeles");
    let missing = fixture.root_path.join("b.txt");

    let batch = GlossaryReader::new(ReaderConfig::default())
        .read_inputs_batch(&[present, missing])
        .await
        .expect("Batch reading should not fail without fail_fast");

    let tokenizer = WhitespaceTokenizer::new();
    let glossary = CITY_GLOSSARY.iter().copied();
    let extractor =
        GlossaryExtractor::new(glossary, ExtractorConfig::default(), &tokenizer).unwrap();

    let counts: Vec<_> = batch
        .iter()
        .map(|(content, stats)| {
            let found = extractor.extract(&tokenizer.tokens(content)).len();
            (stats.read_error.is_some(), found)
        })
        .collect();
    assert_eq!(counts, vec![(false, 2), (true, 0)]);
}
