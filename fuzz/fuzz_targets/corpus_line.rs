use honggfuzz::fuzz;

use dayi::freq::parse_corpus_line;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            let text = String::from_utf8_lossy(data);
            for line in text.lines() {
                let _ = parse_corpus_line(line, 4);
            }
        });
    }
}
