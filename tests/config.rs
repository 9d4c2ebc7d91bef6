use stockplot::{VisualizerConfig, DEFAULT_COMPONENTS};

#[test]
fn defaults_match_fourier_overlay() {
    let cfg = VisualizerConfig::default();
    assert_eq!(cfg.components, DEFAULT_COMPONENTS.to_vec());
    assert!(cfg.legend);
    assert_eq!(cfg.date_format, "%Y-%m-%d");
}

#[test]
fn partial_yaml_keeps_other_defaults() {
    let cfg = VisualizerConfig::from_yaml_str("title: SPCE close\ncomponents: [2, 4]\n").unwrap();
    assert_eq!(cfg.title, "SPCE close");
    assert_eq!(cfg.components, vec![2, 4]);
    assert_eq!(cfg.window_size, [1400.0, 900.0]);
}

#[test]
fn load_reads_file_and_reports_bad_yaml() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good.yaml");
    std::fs::write(&good, "legend: false\n").unwrap();
    assert!(!VisualizerConfig::load(&good).unwrap().legend);

    let bad = dir.path().join("bad.yaml");
    std::fs::write(&bad, "components: nope\n").unwrap();
    assert!(matches!(
        VisualizerConfig::load(&bad),
        Err(stockplot::Error::Yaml(_))
    ));
}
