use std::cell::Cell;

/// Counts how many times the wrapped function was called.
#[derive(Debug, Default)]
pub struct Probe {
    calls: Cell<usize>,
}

impl Probe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn wrap<'a, T, U>(&'a self, f: impl FnOnce(T) -> U + 'a) -> impl FnOnce(T) -> U + 'a {
        move |value| {
            self.calls.set(self.calls.get() + 1);
            f(value)
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

/// Remove all whitespace that is not part of a string literal.
///
/// Key order is kept as written, unlike a round trip through `serde_json::Value`.
pub fn compact(json: &str) -> String {
    let mut output = String::with_capacity(json.len());
    let mut in_string = false;
    let mut escaped = false;

    for c in json.chars() {
        if in_string {
            output.push(c);
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                output.push(c);
            }
            c if c.is_whitespace() => {}
            c => output.push(c),
        }
    }

    output
}
