use trial_balance_engine::llm::{narrate, OpenAiClient};
use trial_balance_engine::{analyze_csv, AnalyzerConfig};

const SAMPLE_TRIAL_BALANCE: &str = "\
Account Name,Debit,Credit,Month
Cash,9000,0,Jan
Revenue - Sales,0,12000,Jan
Salaries and Wages,2500,0,Jan
Electric Bill,500,0,Jan
";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let api_key = std::env::var("OPENAI_API_KEY")
        .expect("set OPENAI_API_KEY to run the commentary example");

    let config = AnalyzerConfig {
        starting_cash: 25_000.0,
    };
    let report = analyze_csv(SAMPLE_TRIAL_BALANCE.as_bytes(), &config)?;

    println!(
        "Computed {} monthly summaries, balance check: {}",
        report.monthly_summaries.len(),
        report.balance_check.is_balanced
    );

    let client = OpenAiClient::new(api_key);
    match narrate(&report, &client).await {
        Some(commentary) => println!("\nAI Summary:\n{}", commentary),
        None => println!("\nNo commentary available; financial tables above remain valid."),
    }

    Ok(())
}
