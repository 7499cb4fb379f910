//! SignatureStyle - スタイルタグ（閉じた列挙）
//!
//! 21 種類の固定スタイル。各スタイルは説明文を 1 つ持ち、
//! 説明文はプロンプト合成（[`super::prompt::compose_prompt`]）でのみ使われます。
//! ワイヤ上は lowercase の文字列（`"classic"` など）です。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of signature styles.
///
/// The enum is the single source of truth: serde derives the wire form,
/// `description()` carries the provider-facing prose, and `ALL` drives
/// catalog listings. Adding a variant is a deliberate schema change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignatureStyle {
    Elegant,
    Bold,
    Casual,
    Professional,
    Artistic,
    Minimalist,
    Calligraphy,
    Modern,
    Classic,
    Script,
    Corporate,
    Handwritten,
    Vintage,
    Formal,
    Creative,
    Stylized,
    Decorative,
    Flourish,
    Monoline,
    Brush,
    Gothic,
}

impl SignatureStyle {
    /// 全スタイル（カタログ表示・テスト用）
    pub const ALL: [SignatureStyle; 21] = [
        SignatureStyle::Elegant,
        SignatureStyle::Bold,
        SignatureStyle::Casual,
        SignatureStyle::Professional,
        SignatureStyle::Artistic,
        SignatureStyle::Minimalist,
        SignatureStyle::Calligraphy,
        SignatureStyle::Modern,
        SignatureStyle::Classic,
        SignatureStyle::Script,
        SignatureStyle::Corporate,
        SignatureStyle::Handwritten,
        SignatureStyle::Vintage,
        SignatureStyle::Formal,
        SignatureStyle::Creative,
        SignatureStyle::Stylized,
        SignatureStyle::Decorative,
        SignatureStyle::Flourish,
        SignatureStyle::Monoline,
        SignatureStyle::Brush,
        SignatureStyle::Gothic,
    ];

    /// Wire form (lowercase tag).
    pub fn as_str(self) -> &'static str {
        match self {
            SignatureStyle::Elegant => "elegant",
            SignatureStyle::Bold => "bold",
            SignatureStyle::Casual => "casual",
            SignatureStyle::Professional => "professional",
            SignatureStyle::Artistic => "artistic",
            SignatureStyle::Minimalist => "minimalist",
            SignatureStyle::Calligraphy => "calligraphy",
            SignatureStyle::Modern => "modern",
            SignatureStyle::Classic => "classic",
            SignatureStyle::Script => "script",
            SignatureStyle::Corporate => "corporate",
            SignatureStyle::Handwritten => "handwritten",
            SignatureStyle::Vintage => "vintage",
            SignatureStyle::Formal => "formal",
            SignatureStyle::Creative => "creative",
            SignatureStyle::Stylized => "stylized",
            SignatureStyle::Decorative => "decorative",
            SignatureStyle::Flourish => "flourish",
            SignatureStyle::Monoline => "monoline",
            SignatureStyle::Brush => "brush",
            SignatureStyle::Gothic => "gothic",
        }
    }

    /// Provider-facing description, appended verbatim to the composed prompt.
    pub fn description(self) -> &'static str {
        match self {
            SignatureStyle::Elegant => {
                "Craft an elegant signature with refined, graceful curves, smooth flowing lines, and a sophisticated aesthetic."
            }
            SignatureStyle::Bold => {
                "Generate a bold signature with strong, assertive strokes, sharp edges, and a powerful, commanding presence."
            }
            SignatureStyle::Casual => {
                "Design a casual signature with relaxed, free-flowing strokes, a natural and friendly appearance, and an effortless charm."
            }
            SignatureStyle::Professional => {
                "Create a professional signature with clean, balanced lines, minimal flourishes, and a polished look suitable for corporate use."
            }
            SignatureStyle::Artistic => {
                "Generate an artistic signature with creative, expressive flourishes, abstract elements, and a visually striking design."
            }
            SignatureStyle::Minimalist => {
                "Design a minimalist signature with sleek, simple lines, minimal embellishments, and a focus on clarity and elegance."
            }
            SignatureStyle::Calligraphy => {
                "Create a calligraphic signature with flowing, elegant script, balanced letterforms, and classic penmanship."
            }
            SignatureStyle::Modern => {
                "Generate a modern signature with clean, sharp lines, contemporary style, and innovative visual elements."
            }
            SignatureStyle::Classic => {
                "Design a classic signature with timeless, traditional elements, balanced strokes, and a sophisticated appeal."
            }
            SignatureStyle::Script => {
                "Create a script-style signature with beautifully connected, flowing cursive letterforms that convey elegance."
            }
            SignatureStyle::Corporate => {
                "Generate a corporate signature with a formal, professional appearance, structured strokes, and clear readability for official use."
            }
            SignatureStyle::Handwritten => {
                "Design a natural handwritten signature with authentic-looking, slightly imperfect strokes that convey a personal touch."
            }
            SignatureStyle::Vintage => {
                "Create a vintage signature with old-fashioned stylistic elements, classic curves, and an antique character."
            }
            SignatureStyle::Formal => {
                "Generate a formal signature with dignified, refined strokes, and an elegant, sophisticated presentation."
            }
            SignatureStyle::Creative => {
                "Design a creative signature with unique, unconventional styling, artistic curves, and distinctive personality."
            }
            SignatureStyle::Stylized => {
                "Create a stylized signature with distinctive flair, artistic curves, and unique decorative elements that reflect personality."
            }
            SignatureStyle::Decorative => {
                "Generate a decorative signature with intricate ornamental elements, artistic flourishes, and elegant embellishments."
            }
            SignatureStyle::Flourish => {
                "Design a signature with graceful, flowing decorative extensions and elegant, swirling flourishes."
            }
            SignatureStyle::Monoline => {
                "Create a monoline signature with consistent stroke weight, clean geometric lines, and a cohesive design."
            }
            SignatureStyle::Brush => {
                "Generate a brush pen signature with dynamic stroke variations, organic flow, and a bold, artistic touch."
            }
            SignatureStyle::Gothic => {
                "Design a gothic-style signature with sharp, angular strokes, intricate detailing, and traditional blackletter-inspired elements."
            }
        }
    }
}

impl fmt::Display for SignatureStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown style tag.
#[derive(Debug, thiserror::Error)]
#[error("unknown signature style: {0}")]
pub struct UnknownStyle(String);

impl FromStr for SignatureStyle {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SignatureStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| UnknownStyle(s.to_string()))
    }
}
