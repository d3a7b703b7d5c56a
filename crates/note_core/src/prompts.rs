//! Prompt templates and the generation prompt builder.

use crate::models::{Length, OutputMode};

pub const CLEANUP_PROMPT: &str = "以下の文章を自然な日本語に書き直してください。

【指示】
- 「ですね」「ですよ」「ましょう」「ますね」の連続を避ける
- 体言止めを適度に使う
- 専門用語はそのまま残す
- 過度に丁寧な表現を避け、読者に語りかけるようなトーンに
- 箇条書きの羅列を避け、文章として流れるように
- 「することができます」→「できます」
- 「という点が挙げられます」→ より直接的な表現に
";

pub const CONSISTENCY_CHECK_PROMPT: &str = r#"以下の「新規記事」と「過去記事一覧」を比較し、一貫性をチェックしてください。

【チェック項目】
1. 主張の矛盾：新規記事の主張が過去記事と矛盾していないか
2. 用語・表現の統一性：同じ概念に異なる用語を使っていないか
3. トーン・文体の一貫性：文体が過去記事と大きく異なっていないか
4. 重複チェック：過去記事と内容が重複していないか

【出力形式】
必ず以下のJSON形式で回答してください。他のテキストは含めないでください。

{
  "issues": [
    {
      "type": "contradiction | terminology | tone | duplication",
      "severity": "high | medium | low",
      "description": "問題の説明",
      "suggestion": "改善提案"
    }
  ],
  "summary": "全体的な一貫性評価"
}

問題がない項目はissuesに含めないでください。
"#;

pub const CHAT_TITLE_LABEL: &str = "チャットタイトル";
pub const NEW_ARTICLE_LABEL: &str = "【新規記事】";
pub const PAST_ARTICLES_LABEL: &str = "【過去記事一覧】";
pub const PAST_ARTICLE_SEPARATOR: &str = "\n\n---\n\n";
pub const NO_PAST_ARTICLES_SUMMARY: &str = "比較対象の過去記事がありません。";

impl OutputMode {
    pub fn label(&self) -> &'static str {
        match self {
            OutputMode::Summary => "要約",
            OutputMode::Article | OutputMode::Other(_) => "記事",
        }
    }

    pub fn instruction(&self) -> &'static str {
        match self {
            OutputMode::Summary => {
                "要点を簡潔にまとめてください。箇条書きやポイント整理を中心に、復習・整理に適した形式で出力してください。"
            }
            OutputMode::Article | OutputMode::Other(_) => {
                "読み物として成立する記事を作成してください。導入・本文・まとめの構成で、見出しを適切に使い、読者に語りかけるような文体で書いてください。"
            }
        }
    }
}

impl Length {
    pub fn label(self) -> &'static str {
        match self {
            Length::Short => "短め",
            Length::Standard => "標準",
            Length::Long => "長め",
        }
    }

    pub fn instruction(self) -> &'static str {
        match self {
            Length::Short => "約500〜800文字程度の短い内容にしてください。",
            Length::Standard => "約1500〜2000文字程度の標準的な長さにしてください。",
            Length::Long => "約3000〜4000文字程度の詳細な内容にしてください。",
        }
    }
}

/// Render the system prompt for article/summary generation.
///
/// The template asks for Markdown with a `# Title` first line, which
/// [`crate::normalizer::extract_title`] relies on.
pub fn build_generation_prompt(output_mode: &OutputMode, length: Length) -> String {
    let mode_label = output_mode.label();
    format!(
        "あなたは技術ライターです。以下のチャット会話を、構造化された{mode_label}に変換してください。
Markdown形式で出力してください。

## 出力モード: {mode_label}

{mode_instruction}

## 長さガイドライン: {length_label}
{length_instruction}

## 出力形式
最初の行に「# タイトル」の形式でタイトルを入れてください。
その後に本文を続けてください。
",
        mode_instruction = output_mode.instruction(),
        length_label = length.label(),
        length_instruction = length.instruction(),
    )
}

/// A present, non-empty custom prompt replaces the built-in one entirely.
pub fn resolve_system_prompt<F>(custom_prompt: Option<&str>, fallback: F) -> String
where
    F: FnOnce() -> String,
{
    match custom_prompt {
        Some(prompt) if !prompt.is_empty() => prompt.to_string(),
        _ => fallback(),
    }
}

pub fn generation_user_message(chat_title: &str, chat_content: &str) -> String {
    format!("{CHAT_TITLE_LABEL}: {chat_title}\n\n{chat_content}")
}

pub fn consistency_user_message(new_article: &str, past_articles_block: &str) -> String {
    format!("{NEW_ARTICLE_LABEL}\n{new_article}\n\n{PAST_ARTICLES_LABEL}\n{past_articles_block}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_mode_renders_like_article() {
        let other = OutputMode::Other("poem".to_string());
        for length in [Length::Short, Length::Standard, Length::Long] {
            assert_eq!(
                build_generation_prompt(&other, length),
                build_generation_prompt(&OutputMode::Article, length)
            );
        }
    }

    #[test]
    fn test_unknown_length_renders_like_standard() {
        let parsed = Length::from("enormous");
        assert_eq!(
            build_generation_prompt(&OutputMode::Summary, parsed),
            build_generation_prompt(&OutputMode::Summary, Length::Standard)
        );
    }

    #[test]
    fn test_prompt_interpolates_labels_and_instructions() {
        let prompt = build_generation_prompt(&OutputMode::Summary, Length::Long);

        assert!(prompt.contains("構造化された要約に変換"));
        assert!(prompt.contains("## 出力モード: 要約"));
        assert!(prompt.contains(OutputMode::Summary.instruction()));
        assert!(prompt.contains("## 長さガイドライン: 長め"));
        assert!(prompt.contains(Length::Long.instruction()));
        assert!(prompt.contains("# タイトル"));
    }

    #[test]
    fn test_empty_custom_prompt_falls_back() {
        let resolved = resolve_system_prompt(Some(""), || "built-in".to_string());
        assert_eq!(resolved, "built-in");

        let resolved = resolve_system_prompt(Some("mine"), || unreachable!());
        assert_eq!(resolved, "mine");

        let resolved = resolve_system_prompt(None, || "built-in".to_string());
        assert_eq!(resolved, "built-in");
    }

    #[test]
    fn test_user_messages_use_blank_line_separators() {
        assert_eq!(
            generation_user_message("Rust", "hi"),
            "チャットタイトル: Rust\n\nhi"
        );
        assert_eq!(
            consistency_user_message("new", "old"),
            "【新規記事】\nnew\n\n【過去記事一覧】\nold"
        );
    }
}
