use honggfuzz::fuzz;

use dayi::loader::{parse_line, Line};

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let text = String::from_utf8_lossy(data);
            for line in text.lines() {
                if let Line::Accepted { code, .. } = parse_line(line) {
                    assert_eq!(code, code.to_uppercase());
                }
            }
        });
    }
}
