use packing_slips::*;

#[test]
fn test_default_options_are_valid() {
    let options = SlipOptions::default();
    assert!(options.validate().is_ok());
    assert_eq!(options.variant, LayoutVariant::AddressGrid);
    assert_eq!(options.sort_key, SortKey::ORDER_ID_DESC);
    assert_eq!(options.ready_status, "発送準備中");
    assert_eq!(options.page.usable_width(), 170.0);
}

#[test]
fn test_validation_rejects_bad_geometry() {
    let mut options = SlipOptions::default();
    options.page.bottom_mm = options.page.top_mm;
    match options.validate() {
        Err(SlipError::Config(msg)) => assert!(msg.contains("Bottom limit")),
        other => panic!("Expected Config error, got {:?}", other),
    }

    let mut options = SlipOptions::default();
    options.page.right_mm = 250.0;
    assert!(options.validate().is_err());

    let mut options = SlipOptions::default();
    options.checklist.row_height_mm = 0.0;
    assert!(options.validate().is_err());
}

#[test]
fn test_validation_rejects_empty_grid() {
    let mut options = SlipOptions::default();
    options.address_grid.rows = 0;
    assert!(options.validate().is_err());

    options.address_grid.rows = 3;
    options.address_grid.columns = 1;
    assert!(options.validate().is_ok());
    assert_eq!(options.address_grid.cells_per_page(), 3);
}

#[test]
fn test_validation_rejects_empty_status() {
    let options = SlipOptions {
        ready_status: String::new(),
        ..Default::default()
    };
    assert!(options.validate().is_err());
}

#[test]
fn test_variant_sections() {
    assert!(LayoutVariant::AddressGrid.has_checklist());
    assert!(LayoutVariant::Interleaved.has_checklist());
    assert!(!LayoutVariant::NoChecklist.has_checklist());
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_options() {
    use tempfile::NamedTempFile;

    let mut options = SlipOptions::default();
    options.variant = LayoutVariant::Interleaved;
    options.sort_key = SortKey::PAYMENT_DATE_ASC;
    options.signature.return_address = vec!["〒723-0014".to_string()];
    options.signature.links.push(ShopLink {
        name: "公式ホームページ".to_string(),
        url: "https://example.com".to_string(),
    });

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    options.save(path).await.unwrap();
    let loaded = SlipOptions::load(path).await.unwrap();

    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_partial_config_uses_defaults() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    tokio::fs::write(temp_file.path(), r#"{"variant": "NoChecklist"}"#)
        .await
        .unwrap();

    let loaded = SlipOptions::load(temp_file.path()).await.unwrap();
    assert_eq!(loaded.variant, LayoutVariant::NoChecklist);
    assert_eq!(loaded.page, PageGeometry::default());
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_invalid_config() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    tokio::fs::write(temp_file.path(), "not json").await.unwrap();

    match SlipOptions::load(temp_file.path()).await {
        Err(SlipError::Config(msg)) => assert!(msg.contains("Failed to parse config")),
        other => panic!("Expected Config error, got {:?}", other),
    }
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_shop_example_config() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../demos/slips.example.json");

    let loaded = SlipOptions::load(&path).await.unwrap();
    assert_eq!(loaded.variant, LayoutVariant::Interleaved);
    assert_eq!(loaded.sort_key, SortKey::PAYMENT_DATE_ASC);
    assert_eq!(loaded.signature.return_address.len(), 2);
    assert_eq!(loaded.signature.links.len(), 4);
    assert_eq!(loaded.checklist, ChecklistGeometry::default());
}
