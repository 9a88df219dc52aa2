//! 徽章產生器：依單一影片類型的分類設定，對影片標題比對出徽章清單

use crate::rule::model::{Badge, CategorySettings, MainCategory, Video};

// 大小寫不敏感的子字串包含
fn hit(title_lower: &str, keyword: &str) -> bool {
    title_lower.contains(&keyword.to_lowercase())
}

/// 徽章產生器
pub struct BadgeGenerator;

impl BadgeGenerator {
    /// 產生影片的徽章清單
    ///
    /// 比對方式為純子字串包含（不斷詞、不看詞界）：短關鍵字可能命中
    /// 較長無關詞彙內部，此為既定設計而非缺陷。
    /// 回傳清單永不為空：完全沒命中時回傳「未分類」佔位徽章。
    pub fn generate(video: &Video, settings: Option<&CategorySettings>) -> Vec<Badge> {
        let Some(cfg) = settings else {
            return vec![Badge::unclassified()];
        };

        let title_lower = video.title.to_lowercase();
        let mut badges = Vec::new();

        // 四個純關鍵字主分類
        for main in MainCategory::KEYWORD_CATEGORIES {
            let keywords = match main {
                MainCategory::Chat => &cfg.chat,
                MainCategory::Show => &cfg.show,
                MainCategory::Music => &cfg.music,
                MainCategory::Other => &cfg.other,
                MainCategory::Game | MainCategory::Unclassified => continue,
            };
            for keyword in keywords {
                if hit(&title_lower, keyword) {
                    badges.push(Badge::keyword(main, keyword.clone()));
                }
            }
        }

        // 遊戲分類：名稱或任一別名命中即成立，徽章標籤固定為遊戲正式名稱，
        // 實際命中的別名另記於 hit_keywords 供 tooltip 顯示
        for entry in &cfg.games {
            let mut hit_keywords = Vec::new();
            if hit(&title_lower, &entry.game) {
                hit_keywords.push(entry.game.clone());
            }
            for keyword in &entry.keywords {
                if hit(&title_lower, keyword) {
                    hit_keywords.push(keyword.clone());
                }
            }
            if !hit_keywords.is_empty() {
                badges.push(Badge {
                    main: MainCategory::Game,
                    keyword: Some(entry.game.clone()),
                    hit_keywords,
                });
            }
        }

        if badges.is_empty() {
            vec![Badge::unclassified()]
        } else {
            badges
        }
    }

    /// 維護「未分類」佔位的不變式：
    /// 只要存在任何實際分類徽章就移除佔位，清單為空時補上佔位
    pub fn ensure_unclassified(badges: &mut Vec<Badge>) {
        badges.retain(|b| b.main != MainCategory::Unclassified);
        if badges.is_empty() {
            badges.push(Badge::unclassified());
        }
    }
}
