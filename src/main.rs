//! vtclassify CLI - 離線分類報告工具
//! 讀取匯出的影片清單與分類設定 JSON，輸出各主分類統計與關鍵字建議

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;

use vtclassify::{
    BadgeGenerator, ConfigManager, EditorDataLoader, KeywordMiner, MainCategory, VideoType,
};

#[derive(Parser, Debug)]
#[command(name = "vtclassify", version, about = "影片標題分類與關鍵字建議離線工具")]
struct Cli {
    /// 影片清單 JSON 檔（線上格式陣列，type 欄位可為中文標籤）
    #[arg(long)]
    videos: PathBuf,

    /// 分類設定 JSON 檔（live / videos / shorts 各一組設定）
    #[arg(long)]
    config: PathBuf,

    /// 僅統計指定影片類型（live / videos / shorts）
    #[arg(long, value_name = "TYPE")]
    r#type: Option<String>,

    /// 額外輸出關鍵字建議（括號片語與高頻詞）
    #[arg(long)]
    suggest: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let videos_text = tokio::fs::read_to_string(&cli.videos)
        .await
        .with_context(|| format!("讀取影片清單失敗：{}", cli.videos.display()))?;
    let config_text = tokio::fs::read_to_string(&cli.config)
        .await
        .with_context(|| format!("讀取分類設定失敗：{}", cli.config.display()))?;

    let mut videos = EditorDataLoader::parse_videos_json(&videos_text)?;
    let category_config = EditorDataLoader::parse_config_json(&config_text)?;

    let type_filter = match cli.r#type.as_deref() {
        None => None,
        Some("live") => Some(VideoType::Live),
        Some("videos") => Some(VideoType::Videos),
        Some("shorts") => Some(VideoType::Shorts),
        Some(other) => bail!("未知的影片類型：{}（可用值：live / videos / shorts）", other),
    };
    if let Some(video_type) = type_filter {
        videos.retain(|v| v.video_type == video_type);
    }

    // 分類並統計
    let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
    let mut unclassified = 0usize;
    for video in &mut videos {
        let settings = category_config.settings_of(video.video_type);
        video.badges = BadgeGenerator::generate(video, Some(settings));
        for badge in &video.badges {
            if badge.main == MainCategory::Unclassified {
                unclassified += 1;
            } else {
                *counts.entry(badge.main.label()).or_insert(0) += 1;
            }
        }
    }

    println!("影片總數：{}", videos.len());
    println!("---- 主分類統計（徽章數） ----");
    for (label, count) in &counts {
        println!("{:　<4}{}", label, count);
    }
    println!("{:　<4}{}", "未分類", unclassified);

    if cli.suggest {
        // 離線匯出檔可能沒有 matchedCategories，以本次計算的徽章補上，
        // 讓挖掘器能辨識未分類影片
        for video in &mut videos {
            if video.matched_categories.is_empty() {
                video.matched_categories = video
                    .badges
                    .iter()
                    .map(|b| b.main.label().to_string())
                    .collect();
            }
        }

        let global = ConfigManager::get_default();
        let mined = KeywordMiner::mine(&global, &videos, &[]);

        println!("---- 括號片語建議（自動套用候選） ----");
        if mined.bracket_words.is_empty() {
            println!("（無括號建議）");
        }
        for suggestion in &mined.bracket_words {
            println!("{} ({})", suggestion.keyword, suggestion.count);
        }

        println!("---- 高頻關鍵字建議 ----");
        if mined.high_freq_words.is_empty() {
            println!("（無高頻建議）");
        }
        for suggestion in &mined.high_freq_words {
            println!("{} ({})", suggestion.keyword, suggestion.count);
        }
    }

    Ok(())
}
