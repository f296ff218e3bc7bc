use code128::*;

const WHITE: &str = "\x1B[38;2;255;255;255m█";
const BLACK: &str = "\x1B[38;2;0;0;0m█";

const QUIET_ZONE: usize = 10;
const ROWS: usize = 6;

fn main() {
    let text = std::env::args().nth(1).unwrap_or_else(|| String::from("ABC-123456"));
    let width = code128_modules!(text.chars().count(), QUIET_ZONE);

    // one terminal column per module
    let mut bars: Vec<DrawInstruction<bool>> = Vec::new();
    let options = DrawOptions::new()
        .size(width as f64, ROWS as f64)
        .quiet_zone(QUIET_ZONE as u32)
        .color(true);

    let summary = match draw(&mut bars, &text, options) {
        Ok(summary) => summary,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    let mut line = vec![false; width];
    for bar in &bars {
        let (start, end) = (bar.x as usize, (bar.x + bar.width) as usize);
        line[start..end].fill(bar.color);
    }

    let row: String = line.iter().map(|&on| if on { BLACK } else { WHITE }).collect();
    let blank = str::repeat(WHITE, width);
    println!("{blank}");
    for _ in 0..ROWS {
        println!("{row}");
    }
    println!("{blank}\x1B[0m");
    println!("{} symbols, {} modules", summary.symbol_count, width);
}
