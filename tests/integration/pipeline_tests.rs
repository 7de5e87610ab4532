/*!
 * End-to-end conversion pipeline tests
 */

use std::fs;
use std::path::Path;

use bankdeck::bank::repair::FsProbe;
use bankdeck::{Config, Controller, SourceSpec};
use crate::common;

fn test_source(level: &str, region: &str, filename: &str) -> SourceSpec {
    SourceSpec {
        level: level.to_string(),
        region: region.to_string(),
        filename: filename.to_string(),
        encoding: "utf-8".to_string(),
        picture_prefix: None,
        picture_ext: None,
        version: "vTEST".to_string(),
    }
}

fn test_config(root: &Path, sources: Vec<SourceSpec>) -> Config {
    let mut config = Config::default();
    config.source_root = root.to_path_buf();
    config.sources = sources;
    config
}

#[test]
fn test_transform_source_withMarkerFixture_shouldWriteBothArtifacts() {
    let dir = common::create_temp_dir().unwrap();
    let root = dir.path().to_path_buf();
    common::create_test_file(&root, "cn/a2017.txt", &common::marker_fixture(5)).unwrap();

    let source = test_source("A", "cn", "a2017.txt");
    let config = test_config(&root, vec![source.clone()]);
    let controller = Controller::with_config(config.clone()).unwrap();

    let suite = controller.transform_source(&source, &FsProbe).unwrap();

    assert_eq!(suite.item_count(), 5);
    assert_eq!(suite.random_seed, 65);

    let archive = fs::read_to_string(config.archive_path(&source)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&archive).unwrap();
    assert_eq!(value["level"], "A");
    assert_eq!(value["region"], "cn");
    assert_eq!(value["sections"][0]["items"].as_array().unwrap().len(), 5);
    // The archive carries the canonical pre-shuffle branch order
    assert_eq!(
        value["sections"][0]["items"][0]["branches"][0],
        "alpha"
    );

    let deck = fs::read_to_string(config.deck_path(&source)).unwrap();
    assert_eq!(deck.lines().count(), 5);
    assert!(deck.lines().all(|row| row.split('|').count() == 10));
}

#[test]
fn test_transform_source_withSameLevel_shouldBeReproducible() {
    let run = || {
        let dir = common::create_temp_dir().unwrap();
        let root = dir.path().to_path_buf();
        common::create_test_file(&root, "cn/a2017.txt", &common::marker_fixture(12)).unwrap();

        let source = test_source("A", "cn", "a2017.txt");
        let config = test_config(&root, vec![source.clone()]);
        let controller = Controller::with_config(config.clone()).unwrap();
        controller.transform_source(&source, &FsProbe).unwrap();
        fs::read_to_string(config.deck_path(&source)).unwrap()
    };

    assert_eq!(run(), run());
}

#[test]
fn test_transform_source_withUnknownRegion_shouldFailFatally() {
    let dir = common::create_temp_dir().unwrap();
    let root = dir.path().to_path_buf();
    common::create_test_file(&root, "jp/bank.txt", "[I]X1\n").unwrap();

    let source = test_source("A", "jp", "bank.txt");
    let config = test_config(&root, vec![source.clone()]);
    let controller = Controller::with_config(config).unwrap();

    let error = controller.transform_source(&source, &FsProbe).unwrap_err();
    assert!(error.to_string().contains("Missing parser for region 'jp'"));
}

#[test]
fn test_transform_source_withImagesOnDisk_shouldRepairPictureLinks() {
    let dir = common::create_temp_dir().unwrap();
    let root = dir.path().to_path_buf();
    common::create_test_file(&root, "cn/a2017.txt", &common::marker_fixture(2)).unwrap();
    common::create_test_file(&root, "cn/images/LK0001.jpg", "not really a jpeg").unwrap();

    let source = test_source("A", "cn", "a2017.txt");
    let config = test_config(&root, vec![source.clone()]);
    let controller = Controller::with_config(config).unwrap();

    let suite = controller.transform_source(&source, &FsProbe).unwrap();

    let items = &suite.sections[0].items;
    assert_eq!(items[0].picture.as_deref(), Some("LK0001.jpg"));
    assert_eq!(items[1].picture, None);
}

#[test]
fn test_run_withLevelFilter_shouldConvertOnlySelectedLevels() {
    let dir = common::create_temp_dir().unwrap();
    let root = dir.path().to_path_buf();
    common::create_test_file(&root, "cn/a2017.txt", &common::marker_fixture(3)).unwrap();
    common::create_test_file(&root, "cn/b2017.txt", &common::marker_fixture(3)).unwrap();

    let source_a = test_source("A", "cn", "a2017.txt");
    let source_b = test_source("B", "cn", "b2017.txt");
    let config = test_config(&root, vec![source_a.clone(), source_b.clone()]);
    let controller = Controller::with_config(config.clone()).unwrap();

    controller.run(&["A".to_string()]).unwrap();

    assert!(config.deck_path(&source_a).exists());
    assert!(!config.deck_path(&source_b).exists());
}

#[test]
fn test_run_withAllLevels_shouldConvertEverySource() {
    let dir = common::create_temp_dir().unwrap();
    let root = dir.path().to_path_buf();
    common::create_test_file(&root, "cn/a2017.txt", &common::marker_fixture(3)).unwrap();
    common::create_test_file(&root, "cn/b2017.txt", &common::marker_fixture(4)).unwrap();

    let source_a = test_source("A", "cn", "a2017.txt");
    let source_b = test_source("B", "cn", "b2017.txt");
    let config = test_config(&root, vec![source_a.clone(), source_b.clone()]);
    let controller = Controller::with_config(config.clone()).unwrap();

    controller.run(&[]).unwrap();

    assert!(config.archive_path(&source_a).exists());
    assert!(config.archive_path(&source_b).exists());
}
