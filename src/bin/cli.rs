//! Interactive terminal prompt for the password strength meter.
//!
//! Reads passwords in a loop and prints the evaluation breakdown. Enter `q`
//! (or press Esc / Ctrl+C) to quit. The password string goes to the evaluator
//! unmodified and is not logged or stored anywhere.

use clap::Parser;
use console::{StyledObject, style};
use inquire::{InquireError, Password, PasswordDisplayMode};
use pwd_meter::{IMPROVEMENT_TIPS, LengthBounds, StrengthReport, evaluate_password_strength};
use secrecy::SecretString;

/// Check password strength interactively.
#[derive(Parser, Debug)]
#[command(name = "pwd-meter", version, about)]
struct Args {
    /// Minimum acceptable password length
    #[arg(long, env = "PWD_METER_MIN_LENGTH", default_value_t = pwd_meter::DEFAULT_MIN_LENGTH)]
    min_length: usize,

    /// Maximum acceptable password length
    #[arg(long, env = "PWD_METER_MAX_LENGTH", default_value_t = pwd_meter::DEFAULT_MAX_LENGTH)]
    max_length: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let bounds = LengthBounds::new(args.min_length, args.max_length)?;

    println!("🔐 Password Strength Meter");
    println!("Type a password to check its strength, or 'q' to quit.\n");

    loop {
        let input = match Password::new("Password:")
            .with_display_mode(PasswordDisplayMode::Masked)
            .without_confirmation()
            .prompt()
        {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        if input.eq_ignore_ascii_case("q") {
            break;
        }

        let password = SecretString::new(input.into());
        let report = evaluate_password_strength(&password, &bounds);
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &StrengthReport) {
    println!("\nPassword Strength Analysis:");
    println!(
        "Strength Label: {}",
        colorize(report.label.as_str(), report.color())
    );
    // The /10 denominator is the meter's historical display scale; the score
    // itself caps at 6.
    println!("Complexity Score: {}/10", report.complexity_score);

    println!("\nDetailed Breakdown:");
    println!("Length Check: {}", check_mark(report.length));
    println!("Uppercase Letters: {}", check_mark(report.uppercase));
    println!("Lowercase Letters: {}", check_mark(report.lowercase));
    println!("Numbers: {}", check_mark(report.digits));
    println!("Special Characters: {}", check_mark(report.special_chars));

    println!("\nTips for a Strong Password:");
    for tip in IMPROVEMENT_TIPS {
        println!("- {tip}");
    }
    println!();
}

/// Maps the report's color tag to a terminal style.
fn colorize(text: &str, color: &str) -> StyledObject<String> {
    let styled = style(text.to_string());
    match color {
        "red" => styled.red(),
        "orange" => styled.color256(208),
        "yellow" => styled.yellow(),
        "green" => styled.green(),
        "darkgreen" => styled.color256(22),
        _ => styled.dim(),
    }
}

fn check_mark(score: u8) -> StyledObject<&'static str> {
    if score > 0 {
        style("✓").green()
    } else {
        style("✗").red()
    }
}
