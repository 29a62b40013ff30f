///
/// Token
/// One compiled element of a LIKE pattern.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Token {
    Literal(char),
    /// `_`: exactly one character.
    One,
    /// `%`: any run of characters, including none.
    Run,
}

// An escape char makes the next char literal; a trailing escape is literal.
fn tokenize(pattern: &str, escape: char) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(pattern.len());
    let mut chars = pattern.chars();

    while let Some(ch) = chars.next() {
        let token = match ch {
            c if c == escape => Token::Literal(chars.next().unwrap_or(escape)),
            '%' => Token::Run,
            '_' => Token::One,
            c => Token::Literal(c),
        };
        tokens.push(token);
    }

    tokens
}

///
/// Match `text` against a SQL LIKE `pattern`.
///
/// Supports:
/// - `%` matches zero or more characters
/// - `_` matches exactly one character
/// - `escape` followed by any character matches that character literally
///
/// Matching is case-sensitive and works on chars, not bytes.
///
#[must_use]
pub fn like_match(text: &str, pattern: &str, escape: char) -> bool {
    let tokens = tokenize(pattern, escape);
    let text: Vec<char> = text.chars().collect();

    let mut t = 0;
    let mut p = 0;
    // Position after the most recent `%`, and the text index it is trying.
    let mut resume: Option<(usize, usize)> = None;

    while t < text.len() {
        match tokens.get(p) {
            Some(Token::Run) => {
                p += 1;
                resume = Some((p, t));
                continue;
            }
            Some(Token::One) => {
                p += 1;
                t += 1;
                continue;
            }
            Some(Token::Literal(c)) if *c == text[t] => {
                p += 1;
                t += 1;
                continue;
            }
            _ => {}
        }

        // mismatch: let the last `%` swallow one more character
        let Some((run_p, run_t)) = resume else {
            return false;
        };
        p = run_p;
        t = run_t + 1;
        resume = Some((run_p, t));
    }

    tokens[p..].iter().all(|token| *token == Token::Run)
}
