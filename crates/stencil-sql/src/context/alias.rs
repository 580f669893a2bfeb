/// Produces `a`..`z`, then `a1`..`z1`, `a2`..`z2` and so on. Never runs out.
#[derive(Debug, Default)]
pub(super) struct AliasGenerator {
    next: usize,
}

impl AliasGenerator {
    pub(super) fn next(&mut self) -> String {
        let n = self.next;
        self.next += 1;

        let letter = char::from(b'a' + (n % 26) as u8);
        match n / 26 {
            0 => letter.to_string(),
            round => format!("{letter}{round}"),
        }
    }
}
