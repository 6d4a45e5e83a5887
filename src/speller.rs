// 🔤 Number Speller - integers as English words
//
// Base-1000 chunks, most significant first, each followed by its scale
// word. Words are joined with single spaces.

const ONES: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

const TEENS: [&str; 10] = [
    "Ten",
    "Eleven",
    "Twelve",
    "Thirteen",
    "Fourteen",
    "Fifteen",
    "Sixteen",
    "Seventeen",
    "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

/// Scale word per chunk index (0 = units).
const SCALES: [&str; 4] = ["", "Thousand", "Million", "Billion"];

/// Smallest magnitude the scale table cannot name (10^12).
pub const SPELLABLE_LIMIT: u64 = 1_000_000_000_000;

// ============================================================================
// PUBLIC API
// ============================================================================

/// Spell a 32-bit value.
///
/// `to_words(1994)` is `"One Thousand Nine Hundred Ninety Four"`.
/// `i32::MIN` is spelled from its unsigned magnitude.
pub fn to_words(n: i32) -> String {
    spell(n < 0, u64::from(n.unsigned_abs()))
}

/// Spell a 64-bit value, or `None` when |n| >= 10^12.
pub fn to_words_wide(n: i64) -> Option<String> {
    let magnitude = n.unsigned_abs();
    if magnitude >= SPELLABLE_LIMIT {
        return None;
    }
    Some(spell(n < 0, magnitude))
}

// ============================================================================
// CHUNK RENDERING
// ============================================================================

/// `magnitude` must be below `SPELLABLE_LIMIT`.
fn spell(negative: bool, magnitude: u64) -> String {
    if magnitude == 0 {
        return "Zero".to_string();
    }

    let mut chunks: Vec<Vec<&'static str>> = Vec::new();
    let mut rest = magnitude;
    let mut index = 0;

    while rest > 0 {
        let part = (rest % 1000) as usize;
        if part != 0 {
            let mut words = render_chunk(part);
            if !SCALES[index].is_empty() {
                words.push(SCALES[index]);
            }
            chunks.push(words);
        }
        rest /= 1000;
        index += 1;
    }

    let mut words: Vec<&str> = Vec::new();
    if negative {
        words.push("Negative");
    }
    // Chunks were collected least significant first
    for chunk in chunks.iter().rev() {
        words.extend(chunk.iter().copied());
    }

    words.join(" ")
}

/// Words for 0 < part < 1000.
fn render_chunk(part: usize) -> Vec<&'static str> {
    let mut words = Vec::with_capacity(4);
    let mut rest = part;

    if rest >= 100 {
        words.push(ONES[rest / 100]);
        words.push("Hundred");
        rest %= 100;
    }

    if (10..20).contains(&rest) {
        words.push(TEENS[rest - 10]);
    } else {
        if rest >= 20 {
            words.push(TENS[rest / 10]);
        }
        if rest % 10 > 0 {
            words.push(ONES[rest % 10]);
        }
    }

    words
}

// ============================================================================
// TESTS
// ============================================================================
