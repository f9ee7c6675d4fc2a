//! Manual smoke-test binary exercising the Normalizer across all three
//! languages and both directions, run directly against in-process
//! grammars (no `.fst` files on disk).

use wetext_fst::{Language, Normalizer, NormalizerConfig, Operator};

fn main() {
    env_logger::init();

    println!("=== Chinese TN ===");
    let mut zh_tn = Normalizer::new(NormalizerConfig::new().with_lang(Language::Zh));
    for input in ["123", "2024年", "100元", "3/4", "1.5", "下午3点30分"] {
        report(&mut zh_tn, input);
    }

    println!("\n=== Chinese ITN ===");
    let mut zh_itn = Normalizer::new(
        NormalizerConfig::new()
            .with_lang(Language::Zh)
            .with_operator(Operator::Itn),
    );
    for input in ["一百二十三", "二零二四年", "四分之三", "一点五"] {
        report(&mut zh_itn, input);
    }

    println!("\n=== English TN ===");
    let mut en_tn = Normalizer::new(
        NormalizerConfig::new()
            .with_lang(Language::En)
            .with_operator(Operator::Tn),
    );
    for input in ["2012-01-05", "$12.50", "3/4", "120"] {
        report(&mut en_tn, input);
    }

    println!("\n=== Japanese TN ===");
    let mut ja_tn = Normalizer::new(NormalizerConfig::new().with_lang(Language::Ja));
    for input in ["2024/10/01", "10km"] {
        report(&mut ja_tn, input);
    }

    println!("\n=== Japanese ITN ===");
    let mut ja_itn = Normalizer::new(
        NormalizerConfig::new()
            .with_lang(Language::Ja)
            .with_operator(Operator::Itn),
    );
    for input in ["二千二十四年十月一日"] {
        report(&mut ja_itn, input);
    }
}

fn report(normalizer: &mut Normalizer, input: &str) {
    match normalizer.normalize(input) {
        Ok(result) => println!("   '{input}' => '{result}'"),
        Err(e) => println!("   '{input}' => Error: {e:?}"),
    }
}
