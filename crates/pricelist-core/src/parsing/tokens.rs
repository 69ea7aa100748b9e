/// A whitespace-delimited token with its byte span in the source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

/// Split a line into whitespace-separated tokens, keeping byte offsets so
/// callers can slice multi-token fields back out with their spacing intact.
pub fn tokenize(line: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start = None;

    for (i, c) in line.char_indices() {
        if c.is_whitespace() {
            if let Some(s) = start.take() {
                tokens.push(Token {
                    text: &line[s..i],
                    start: s,
                    end: i,
                });
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }

    if let Some(s) = start {
        tokens.push(Token {
            text: &line[s..],
            start: s,
            end: line.len(),
        });
    }

    tokens
}

/// Split a line by gaps of 2+ whitespace characters (column gaps in
/// layout-preserving text output).
pub fn split_by_whitespace_gaps(line: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = None;
    let mut last_non_ws_end = 0;
    let mut space_count = 0;

    for (i, c) in line.char_indices() {
        if c.is_whitespace() {
            space_count += 1;
            if space_count == 2 {
                if let Some(s) = start.take() {
                    segments.push(&line[s..last_non_ws_end]);
                }
            }
        } else {
            if start.is_none() {
                start = Some(i);
            }
            last_non_ws_end = i + c.len_utf8();
            space_count = 0;
        }
    }

    if let Some(s) = start {
        segments.push(line[s..].trim_end());
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_spans() {
        let tokens = tokenize("12  AB C");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["12", "AB", "C"]);
        assert_eq!(tokens[1].start, 4);
        assert_eq!(tokens[1].end, 6);
        assert_eq!(tokens[2].end, 8);
    }

    #[test]
    fn test_tokenize_unicode_whitespace_and_text() {
        let tokens = tokenize("AÇÚCAR\u{a0}MASCAVO\tUN");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text).collect();
        assert_eq!(texts, vec!["AÇÚCAR", "MASCAVO", "UN"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_split_by_whitespace_gaps() {
        let segments =
            split_by_whitespace_gaps("55885   ACUCAR DE COCO 150G   UN    17,9900   4,0000");
        assert_eq!(
            segments,
            vec!["55885", "ACUCAR DE COCO 150G", "UN", "17,9900", "4,0000"]
        );
    }

    #[test]
    fn test_split_keeps_single_spaces_inside_segments() {
        let segments = split_by_whitespace_gaps("  Codigo  Descricao do produto ");
        assert_eq!(segments, vec!["Codigo", "Descricao do produto"]);
    }
}
