//! Shared fixtures for integration tests.
#![allow(dead_code)]

use splatdraw_bot::AppState;
use splatdraw_bot::catalog::WeaponCatalog;
use splatdraw_bot::config::Config;
use std::path::{Path, PathBuf};

/// 20 weapons: 3 シューター, 17 of other types, none of ワイパー.
pub const FIXTURE: &[(&str, &str)] = &[
    ("わかばシューター", "シューター"),
    ("スプラシューター", "シューター"),
    ("プライムシューター", "シューター"),
    ("スプラローラー", "ローラー"),
    ("カーボンローラー", "ローラー"),
    ("ダイナモローラー", "ローラー"),
    ("スプラチャージャー", "チャージャー"),
    ("リッター4K", "チャージャー"),
    ("バレルスピナー", "スピナー"),
    ("スプラスピナー", "スピナー"),
    ("ホットブラスター", "ブラスター"),
    ("ロングブラスター", "ブラスター"),
    ("スプラマニューバー", "マニューバー"),
    ("デュアルスイーパー", "マニューバー"),
    ("パブロ", "フデ"),
    ("バケットスロッシャー", "スロッシャー"),
    ("ヒッセン", "スロッシャー"),
    ("パラシェルター", "シェルター"),
    ("キャンピングシェルター", "シェルター"),
    ("トライストリンガー", "ストリンガー"),
];

pub fn image_for(name: &str) -> String {
    format!("{name}.png")
}

pub fn catalog_json(entries: &[(&str, &str)]) -> String {
    let weapons: Vec<serde_json::Value> = entries
        .iter()
        .map(|(name, ty)| {
            serde_json::json!({
                "name": name,
                "type": ty,
                "subName": "スプラッシュボム",
                "specialName": "グレートバリア",
                "specialPoint": 200,
                "image": image_for(name),
            })
        })
        .collect();
    serde_json::Value::Array(weapons).to_string()
}

pub fn fixture_catalog() -> WeaponCatalog {
    WeaponCatalog::from_json_str(&catalog_json(FIXTURE)).expect("fixture catalog parses")
}

/// Fresh, empty scratch directory unique to this process and tag.
pub fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("splatdraw-test-{}-{tag}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

pub fn test_config(weapons_file: &Path, images_dir: &Path) -> Config {
    Config {
        token: "test-token".into(),
        weapons_file: weapons_file.to_path_buf(),
        images_dir: images_dir.to_path_buf(),
        guild_id: None,
        health_bind: None,
        overwrite_toggle: true,
    }
}

/// App state over the fixture catalog. When `with_images` is set every weapon has an image file.
pub fn app_state(tag: &str, with_images: bool) -> (AppState, PathBuf) {
    let dir = scratch_dir(tag);
    let weapons_file = dir.join("weapons_list.json");
    std::fs::write(&weapons_file, catalog_json(FIXTURE)).expect("write catalog");
    let images_dir = dir.join("images");
    std::fs::create_dir_all(&images_dir).expect("create images dir");
    if with_images {
        for (name, _) in FIXTURE {
            std::fs::write(images_dir.join(image_for(name)), b"png").expect("write image");
        }
    }
    let state = AppState::new(test_config(&weapons_file, &images_dir), fixture_catalog());
    (state, dir)
}
