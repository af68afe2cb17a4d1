//! Tests d'intégration pour gcscan Core

use gcscan_core::{
    analyze, summarize_composition, windowed_gc, AnalysisConfig, GcError, InputFormat,
    Nucleotide, Sequence, ValidationMode,
};

fn pairs(text: &str, w: usize) -> Vec<(usize, f64)> {
    windowed_gc(&Sequence::new(text), w)
        .unwrap()
        .windows()
        .iter()
        .map(|w| (w.position, w.gc_percentage))
        .collect()
}

#[test]
fn test_reference_scenarios() {
    assert_eq!(pairs("GGCC", 4), vec![(0, 100.0)]);
    assert_eq!(pairs("AATT", 4), vec![(0, 0.0)]);
    assert_eq!(
        pairs("ATGCATGCATGC", 4),
        vec![(0, 50.0), (4, 50.0), (8, 50.0)]
    );
    assert!(pairs("ATGC", 100).is_empty());
}

#[test]
fn test_empty_sequence_composition() {
    match summarize_composition(&Sequence::new("")) {
        Err(GcError::EmptyInput) => {}
        other => panic!("EmptyInput attendu, obtenu {:?}", other),
    }
}

#[test]
fn test_balanced_composition() {
    let summary = summarize_composition(&Sequence::new("ATGCATGC")).unwrap();
    assert_eq!(summary.total_length, 8);
    for base in Nucleotide::ALL {
        assert_eq!(summary.count(base), 2);
        assert_eq!(summary.percentage(base), 25.0);
    }
    assert_eq!(
        summary.to_string(),
        "Summary: Full Length(8 bp) | A(25.0% 2) | T(25.0% 2) | G(25.0% 2) | C(25.0% 2)"
    );
}

#[test]
fn test_gene_file_default_window() {
    // 16 bp répétés 100 fois, comme un fichier de gène synthétique
    let gene = "ATGCGCATGCGATCGT".repeat(100);
    let wrapped: String = gene
        .as_bytes()
        .chunks(60)
        .map(|line| format!("{}\n", std::str::from_utf8(line).unwrap()))
        .collect();

    let report = analyze(wrapped.as_bytes(), &AnalysisConfig::default()).unwrap();

    assert_eq!(report.summary.total_length, 1600);
    assert_eq!(report.series.len(), 16);
    assert_eq!(report.series.positions()[15], 1500);
    for window in report.series.windows() {
        assert!((0.0..=100.0).contains(&window.gc_percentage));
    }
    assert_eq!(report.summary.counted(), 1600);
}

#[test]
fn test_header_pollutes_raw_mode_only() {
    let upload = b">seq1\nGGGG\nCCCC\n";

    let raw = analyze(upload, &AnalysisConfig::with_window_size(4)).unwrap();
    assert_eq!(raw.summary.total_length, 13);
    assert_eq!(raw.summary.uncounted(), 5);

    let fasta = AnalysisConfig {
        window_size: 4,
        format: InputFormat::Fasta,
        ..Default::default()
    };
    let report = analyze(upload, &fasta).unwrap();
    assert_eq!(report.summary.total_length, 8);
    assert_eq!(report.series.percentages(), vec![100.0, 100.0]);
}

#[test]
fn test_strict_mode_rejects_header() {
    let config = AnalysisConfig {
        validation: ValidationMode::Strict,
        ..Default::default()
    };
    let result = analyze(b">seq1\nACGT\n", &config);
    assert!(matches!(
        result,
        Err(GcError::InvalidBase { base: '>', position: 0 })
    ));
}

#[test]
fn test_decode_error_stops_pipeline() {
    let result = analyze(&[b'A', b'C', 0xc3, 0x28], &AnalysisConfig::default());
    match result {
        Err(e) => {
            assert!(matches!(e, GcError::Decode(_)));
            assert!(e.is_input_error());
            assert!(e.to_string().contains("UTF-8"));
        }
        Ok(_) => panic!("un fichier non UTF-8 doit être rejeté"),
    }
}
