use trial_balance_engine::{
    analyze_csv, monthly_summary_to_csv, AnalyzerConfig, SUMMARY_EXPORT_NAME,
};

const SAMPLE_TRIAL_BALANCE: &str = "\
Account Name,Debit,Credit,Month
Cash,12000,0,Jan
Accounts Receivable,3000,0,Jan
Revenue - Product Sales,0,18000,Jan
Salaries and Wages,2400,0,Jan
Office Rent,600,0,Jan
Cash,16000,0,Feb
Accounts Receivable,5000,0,Feb
Revenue - Product Sales,0,24500,Feb
Salaries and Wages,2800,0,Feb
Office Rent,700,0,Feb
";

fn main() {
    let config = AnalyzerConfig {
        starting_cash: 50_000.0,
    };
    let report = analyze_csv(SAMPLE_TRIAL_BALANCE.as_bytes(), &config)
        .expect("sample trial balance should parse");

    println!(
        "Balance check: {} (total {:.2})",
        if report.balance_check.is_balanced {
            "Balanced"
        } else {
            "Not Balanced"
        },
        report.balance_check.total
    );

    println!("\nBalance Sheet:");
    for line in &report.balance_sheet {
        println!("  {:<30} {:>12.2}", line.account, line.net);
    }

    println!("\nProfit & Loss:");
    for line in &report.profit_loss {
        println!("  {:<30} {:>12.2}", line.account, line.net);
    }

    println!("\nMonthly Summary:");
    for summary in &report.monthly_summaries {
        println!(
            "  {:<5} revenue {:>10.2}  expenses {:>10.2}  profit {:>10.2}  ({:+.1}% rev MoM)",
            summary.month,
            summary.revenue,
            summary.expenses,
            summary.profit,
            summary.revenue_mom_percent
        );
    }

    println!("\nTagged activity:");
    for activity in &report.tagged_activity {
        println!(
            "  {:<5} {:<12} {:>12.2}",
            activity.month,
            activity.tag.label(),
            activity.net
        );
    }

    println!(
        "\nMonthly burn: {:.2}, runway: {:.1} months (starting cash {:.2})",
        report.monthly_burn, report.runway_months, config.starting_cash
    );

    println!(
        "\nExport payload for {}:\n{}",
        SUMMARY_EXPORT_NAME,
        monthly_summary_to_csv(&report.monthly_summaries)
    );
}
