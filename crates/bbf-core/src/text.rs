/// Capitalise the first letter of every word, lowercasing the rest.
///
/// A letter starts a word when the character before it is not alphabetic, so
/// `"mobile mechanic"` becomes `"Mobile Mechanic"` and `"o'neil"` becomes
/// `"O'Neil"`.
#[must_use]
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_alpha = false;
    for c in input.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}
