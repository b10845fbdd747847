//! Spell out integers using the Indian numbering scale
//! (hundred, thousand, lakh, crore).

const ONES: [&str; 10] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

const TEENS: [&str; 10] = [
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Convert a non-negative integer to English words on the Indian scale.
///
/// `to_words(0)` is `"zero"`; within a composed number the zero base case
/// contributes nothing (so 100 is "one hundred", not "one hundred zero").
/// Amounts of a crore and above continue the scale with a crore band.
#[must_use]
pub fn to_words(n: u64) -> String {
    if n == 0 {
        return "zero".to_string();
    }
    convert(n)
}

fn convert(n: u64) -> String {
    match n {
        0..=9 => ONES[n as usize].to_string(),
        10..=19 => TEENS[(n - 10) as usize].to_string(),
        20..=99 => {
            let tens = TENS[(n / 10) as usize];
            match n % 10 {
                0 => tens.to_string(),
                rem => format!("{tens}-{}", ONES[rem as usize]),
            }
        }
        100..=999 => banded(n, 100, "hundred"),
        1_000..=99_999 => banded(n, 1_000, "thousand"),
        100_000..=9_999_999 => banded(n, 100_000, "lakh"),
        _ => banded(n, 10_000_000, "crore"),
    }
}

/// Spell the `n / scale` part, the scale word, and any remainder.
/// The hundreds band joins its remainder with " and ", the rest with " ".
fn banded(n: u64, scale: u64, word: &str) -> String {
    let head = convert(n / scale);
    match n % scale {
        0 => format!("{head} {word}"),
        rem if scale == 100 => format!("{head} {word} and {}", convert(rem)),
        rem => format!("{head} {word} {}", convert(rem)),
    }
}
