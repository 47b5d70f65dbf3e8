//! Test Request Generator
//!
//! Writes random prediction requests as JSON lines to stdout, ready to be
//! piped into `fraud-score`.
//!
//! Usage: request-generator [count] [high_risk_rate] [delay_ms] [seed]

use fraud_prediction_form::types::request::{
    CardCategory, CardType, DeviceType, EmailDomain, PredictionRequest, ProductCode, ADDR1_MAX,
    ADDR2_MAX,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Write;
use std::time::Duration;
use tracing::info;

/// Request generator for testing
struct RequestGenerator {
    rng: StdRng,
}

impl RequestGenerator {
    fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Everyday purchase: modest amounts, common cards and domains
    fn generate_typical(&mut self) -> PredictionRequest {
        PredictionRequest {
            card1: self.rng.gen_range(1000..18000) as f64,
            card2: self.rng.gen_range(100..600) as f64,
            card4: self.pick(&[CardCategory::Visa, CardCategory::Mastercard]),
            card6: self.pick(CardType::ALL),
            addr1: self.rng.gen_range(100..=ADDR1_MAX),
            addr2: 87,
            transaction_amt: self.rng.gen_range(10..300) as f64,
            p_emaildomain: self.pick(&[
                EmailDomain::Gmail,
                EmailDomain::Yahoo,
                EmailDomain::Outlook,
            ]),
            product_cd: ProductCode::W,
            device_type: self.pick(DeviceType::ALL),
        }
    }

    /// Unusual profile: large amounts, rare products, foreign billing
    fn generate_high_risk(&mut self) -> PredictionRequest {
        PredictionRequest {
            card1: self.rng.gen_range(0..20000) as f64,
            card2: self.rng.gen_range(0..20000) as f64,
            card4: self.pick(CardCategory::ALL),
            card6: CardType::Credit,
            addr1: self.rng.gen_range(0..=ADDR1_MAX),
            addr2: self.rng.gen_range(0..=ADDR2_MAX),
            transaction_amt: self.rng.gen_range(2000..20000) as f64,
            p_emaildomain: self.pick(&[EmailDomain::MailCom, EmailDomain::Others]),
            product_cd: self.pick(&[ProductCode::C, ProductCode::H, ProductCode::S]),
            device_type: DeviceType::Desktop,
        }
    }

    fn pick<T: Copy>(&mut self, choices: &[T]) -> T {
        choices[self.rng.gen_range(0..choices.len())]
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("request_generator=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let count: u64 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100);
    let high_risk_rate: f64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(0.1);
    let delay_ms: u64 = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(0);
    let seed: Option<u64> = args.get(4).and_then(|s| s.parse().ok());

    info!(
        count = count,
        high_risk_rate = high_risk_rate,
        delay_ms = delay_ms,
        seed = ?seed,
        "Generating prediction requests"
    );

    let mut generator = RequestGenerator::new(seed);
    let mut stdout = std::io::stdout().lock();
    let mut high_risk_count = 0;

    for i in 0..count {
        let request = if generator.rng.gen_bool(high_risk_rate.clamp(0.0, 1.0)) {
            high_risk_count += 1;
            generator.generate_high_risk()
        } else {
            generator.generate_typical()
        };

        serde_json::to_writer(&mut stdout, &request)?;
        stdout.write_all(b"\n")?;

        if (i + 1) % 100 == 0 {
            info!("Generated {}/{} requests ({} high risk)", i + 1, count, high_risk_count);
        }

        if delay_ms > 0 {
            stdout.flush()?;
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }
    }

    stdout.flush()?;
    info!(
        "Completed! Generated {} requests ({} typical, {} high risk)",
        count,
        count - high_risk_count,
        high_risk_count
    );

    Ok(())
}
