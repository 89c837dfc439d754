use linear_order::counting::{median_comparison_trial, ComparisonTrialRow, TrialConfig};

fn main() -> linear_order::Result<()> {
    let config = TrialConfig::default();
    println!("Median counting: less-than comparisons, selection vs. full sort");
    println!("{}", ComparisonTrialRow::HEADER);

    for row in median_comparison_trial(&config)? {
        println!("{}", row);
    }
    Ok(())
}
