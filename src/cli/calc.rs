//! Calculator CLI commands
//!
//! Pure computations; nothing here touches storage or needs a user.

use clap::Subcommand;

use crate::calculators::{
    amortization_schedule, calculate_loan, project_growth, solve_time_to_goal, GrowthInput, LoanInput,
    SavingsGoalInput,
};
use crate::config::settings::Settings;
use crate::display::report::{format_duration, separator};
use crate::error::FintrackResult;

/// Calculator subcommands
#[derive(Subcommand)]
pub enum CalcCommands {
    /// Monthly payment and total interest for a loan
    Loan {
        /// Amount borrowed
        #[arg(short, long)]
        principal: Option<f64>,
        /// Annual interest rate in percent
        #[arg(short, long)]
        rate: Option<f64>,
        /// Term in years
        #[arg(short, long)]
        years: Option<f64>,
        /// Print the month-by-month amortization schedule
        #[arg(long)]
        schedule: bool,
    },
    /// Project the growth of an investment with monthly contributions
    Invest {
        /// Starting amount
        #[arg(short, long)]
        initial: Option<f64>,
        /// Monthly contribution
        #[arg(short, long)]
        monthly: Option<f64>,
        /// Expected annual return in percent
        #[arg(short, long)]
        rate: Option<f64>,
        /// Years to project
        #[arg(short, long)]
        years: Option<f64>,
    },
    /// Time needed to reach a savings target
    Savings {
        /// Target amount
        #[arg(short, long)]
        target: Option<f64>,
        /// Amount already saved
        #[arg(short, long)]
        current: Option<f64>,
        /// Monthly contribution
        #[arg(short, long)]
        monthly: Option<f64>,
        /// Annual interest rate in percent
        #[arg(short, long)]
        rate: Option<f64>,
    },
}

fn money(currency: &str, value: f64) -> String {
    if value < 0.0 {
        format!("-{} {:.2}", currency, value.abs())
    } else {
        format!("{} {:.2}", currency, value)
    }
}

/// Handle a calculator command
pub fn handle_calc_command(settings: &Settings, cmd: CalcCommands) -> FintrackResult<()> {
    let currency = &settings.currency_symbol;

    match cmd {
        CalcCommands::Loan {
            principal,
            rate,
            years,
            schedule,
        } => {
            let input = LoanInput {
                principal,
                annual_rate: rate,
                years,
            };
            let result = calculate_loan(&input)?;

            println!("Loan");
            println!("{}", separator(40));
            println!("{:<18} {:>21}", "Monthly payment:", money(currency, result.monthly_payment));
            println!("{:<18} {:>21}", "Payments:", format!("{:.0}", result.payment_count.ceil()));
            println!("{:<18} {:>21}", "Total paid:", money(currency, result.total_payment));
            println!("{:<18} {:>21}", "Total interest:", money(currency, result.total_interest));

            if schedule {
                println!();
                println!(
                    "{:>5} {:>14} {:>14} {:>14} {:>16}",
                    "#", "Payment", "Interest", "Principal", "Balance"
                );
                println!("{}", separator(67));
                for row in amortization_schedule(&input)? {
                    println!(
                        "{:>5} {:>14.2} {:>14.2} {:>14.2} {:>16.2}",
                        row.number, row.payment, row.interest, row.principal, row.balance
                    );
                }
            }
        }

        CalcCommands::Invest {
            initial,
            monthly,
            rate,
            years,
        } => {
            let result = project_growth(&GrowthInput {
                initial,
                monthly_contribution: monthly,
                annual_rate: rate,
                years,
            })?;

            println!("Investment projection");
            println!("{}", separator(40));
            println!("{:<18} {:>21}", "Final amount:", money(currency, result.final_amount));
            println!("{:<18} {:>21}", "Contributed:", money(currency, result.total_contributed));
            println!("{:<18} {:>21}", "Returns:", money(currency, result.total_returns));
        }

        CalcCommands::Savings {
            target,
            current,
            monthly,
            rate,
        } => {
            let result = solve_time_to_goal(&SavingsGoalInput {
                target,
                current,
                monthly_contribution: monthly,
                annual_rate: rate,
            })?;

            println!("Savings goal");
            println!("{}", separator(40));
            println!("{:<18} {:>21}", "Time needed:", format_duration(result.months));
            println!("{:<18} {:>21}", "Months:", format!("{:.1}", result.months));
            println!("{:<18} {:>21}", "Still to save:", money(currency, result.remaining));
            println!("{:<18} {:>21}", "Final amount:", money(currency, result.final_amount));
        }
    }

    Ok(())
}
