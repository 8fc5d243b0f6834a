//! Text helpers: width-constrained wrapping and postal code formatting

fn is_break(ch: char) -> bool {
    ch == ' ' || ch == '\u{3000}'
}

/// Wrap `text` into lines no wider than `max_width`.
///
/// Explicit newlines always start a new line. Within a paragraph the break
/// falls after the last space (ASCII or ideographic) that fits; runs without
/// spaces, which is most Japanese text, break between characters. A single
/// character wider than `max_width` still gets a line of its own. The result
/// always holds at least one line.
pub fn wrap_text<F>(text: &str, max_width: f32, measure: F) -> Vec<String>
where
    F: Fn(&str) -> f32,
{
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        wrap_paragraph(paragraph.trim_end_matches('\r'), max_width, &measure, &mut lines);
    }
    lines
}

fn wrap_paragraph<F>(paragraph: &str, max_width: f32, measure: &F, lines: &mut Vec<String>)
where
    F: Fn(&str) -> f32,
{
    let mut current = String::new();
    // Byte offset just past the last break character in `current`
    let mut last_break: Option<usize> = None;
    let mut wrapped = false;

    for ch in paragraph.chars() {
        let mut candidate = current.clone();
        candidate.push(ch);

        if current.is_empty() || measure(&candidate) <= max_width {
            if current.is_empty() && is_break(ch) && wrapped {
                // Leading space of a continuation line
                continue;
            }
            current = candidate;
            if is_break(ch) {
                last_break = Some(current.len());
            }
            continue;
        }

        wrapped = true;
        if is_break(ch) {
            lines.push(current.trim_end_matches(is_break).to_string());
            current.clear();
            last_break = None;
            continue;
        }

        match last_break {
            Some(at) => {
                let rest = current.split_off(at);
                lines.push(current.trim_end_matches(is_break).to_string());
                current = rest;
            }
            None => lines.push(std::mem::take(&mut current)),
        }
        current.push(ch);
        last_break = None;

        // The carried-over word may itself be too wide now
        while measure(&current) > max_width && current.chars().count() > 1 {
            let split = current
                .char_indices()
                .rev()
                .map(|(i, _)| i)
                .find(|&i| i > 0 && measure(&current[..i]) <= max_width)
                .unwrap_or_else(|| current.chars().next().map_or(0, char::len_utf8));
            let rest = current.split_off(split);
            lines.push(std::mem::replace(&mut current, rest));
        }
    }

    lines.push(current);
}

/// Format a postal code for an address label.
///
/// Seven digits, half- or full-width, become `〒123-4567`. Anything else,
/// such as a code that already carries its hyphen, is printed as given after
/// the postal mark.
pub fn format_postal_code(postal_code: &str) -> String {
    let code = postal_code.trim();
    let digits: Option<String> = code.chars().map(ascii_digit).collect();
    match digits {
        Some(digits) if digits.len() == 7 => format!("〒{}-{}", &digits[..3], &digits[3..]),
        _ => format!("〒{}", code),
    }
}

fn ascii_digit(ch: char) -> Option<char> {
    match ch {
        '0'..='9' => Some(ch),
        '０'..='９' => char::from_u32(ch as u32 - '０' as u32 + '0' as u32),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> f32 {
        s.chars().count() as f32
    }

    #[test]
    fn test_short_text_is_one_line() {
        assert_eq!(wrap_text("hello world", 20.0, chars), vec!["hello world"]);
    }

    #[test]
    fn test_empty_text_is_one_empty_line() {
        assert_eq!(wrap_text("", 10.0, chars), vec![""]);
    }

    #[test]
    fn test_breaks_at_last_space() {
        let lines = wrap_text("one two three four", 9.0, chars);
        assert_eq!(lines, vec!["one two", "three", "four"]);
    }

    #[test]
    fn test_breaks_ideographic_text_per_character() {
        let lines = wrap_text("あいうえおかきくけこ", 4.0, chars);
        assert_eq!(lines, vec!["あいうえ", "おかきく", "けこ"]);
    }

    #[test]
    fn test_ideographic_space_is_a_break() {
        let lines = wrap_text("個数：1\u{3000}作品名", 5.0, chars);
        assert_eq!(lines, vec!["個数：1", "作品名"]);
    }

    #[test]
    fn test_long_word_is_split() {
        let lines = wrap_text("ab abcdefghij", 4.0, chars);
        assert_eq!(lines, vec!["ab", "abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_newlines_split_paragraphs() {
        let lines = wrap_text("first\nsecond", 20.0, chars);
        assert_eq!(lines, vec!["first", "second"]);
    }

    #[test]
    fn test_no_characters_lost() {
        let text = "□個数：2 とても長い作品名のアクセサリー 単価：1200円 小計：2400円";
        let lines = wrap_text(text, 8.0, chars);
        let rejoined: String = lines.concat();
        let expected: String = text.chars().filter(|c| *c != ' ').collect();
        assert_eq!(rejoined.replace(' ', ""), expected);
        assert!(lines.iter().all(|l| chars(l) <= 8.0));
    }

    #[test]
    fn test_format_postal_code() {
        assert_eq!(format_postal_code("7230014"), "〒723-0014");
        assert_eq!(format_postal_code(" 1000001 "), "〒100-0001");
    }

    #[test]
    fn test_format_full_width_postal_code() {
        assert_eq!(format_postal_code("７２３００１４"), "〒723-0014");
        assert_eq!(format_postal_code("723００14"), "〒723-0014");
    }

    #[test]
    fn test_format_postal_code_passthrough() {
        assert_eq!(format_postal_code("723-0014"), "〒723-0014");
        assert_eq!(format_postal_code(""), "〒");
    }
}
