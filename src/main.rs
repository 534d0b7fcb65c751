use std::io::{self, BufRead, Write};

use decint::BigInt;

/// Evaluate one `<operand> <operator> <operand>` line.
fn eval(line: &str) -> Result<BigInt, String> {
    let mut tokens = line.split_whitespace();
    let (Some(lhs), Some(op), Some(rhs), None) =
        (tokens.next(), tokens.next(), tokens.next(), tokens.next())
    else {
        return Err("expected exactly: <operand> <operator> <operand>".to_string());
    };

    let lhs: BigInt = lhs.parse().map_err(|e| format!("left operand: {e}"))?;
    let rhs: BigInt = rhs.parse().map_err(|e| format!("right operand: {e}"))?;

    match op {
        "+" => Ok(lhs + rhs),
        "-" => Ok(lhs - rhs),
        _ => Err(format!("unsupported operation {op:?}")),
    }
}

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    loop {
        stdout.write_all(b">>> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break; // EOF
        }
        if line.trim().is_empty() {
            continue;
        }

        match eval(&line) {
            Ok(result) => println!("{result}"),
            Err(message) => eprintln!("{message}"),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eval_dispatches_operators() {
        assert_eq!(eval("1 + 2").unwrap().to_string(), "3");
        assert_eq!(eval("1 - 2").unwrap().to_string(), "-1");
        assert_eq!(
            eval("123456789123456789 + 123456789123456789")
                .unwrap()
                .to_string(),
            "246913578246913578"
        );
    }

    #[test]
    fn test_eval_rejects_unknown_operator() {
        let message = eval("1 * 2").unwrap_err();
        assert!(message.contains("unsupported operation"), "{message}");
    }

    #[test]
    fn test_eval_reports_operand_parse_failures() {
        assert!(eval("x + 2").unwrap_err().contains("left operand"));
        assert!(eval("1 + y").unwrap_err().contains("right operand"));
    }

    #[test]
    fn test_eval_requires_three_tokens() {
        assert!(eval("1 +").is_err());
        assert!(eval("1 + 2 3").is_err());
    }
}
