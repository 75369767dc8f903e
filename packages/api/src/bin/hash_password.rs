//! Print an Argon2id PHC string for `ADMIN_PASSWORD_HASH`.
//!
//! Reads the password from the first line of stdin:
//!
//! ```sh
//! cargo run -p api --features server --bin hash-password
//! ```

use std::io::BufRead;
use std::process::ExitCode;

use api::auth::hash_password;

fn main() -> ExitCode {
    let mut line = String::new();
    if let Err(e) = std::io::stdin().lock().read_line(&mut line) {
        eprintln!("failed to read password: {e}");
        return ExitCode::FAILURE;
    }

    let Some(password) = password_from_line(&line) else {
        eprintln!("usage: echo <password> | hash-password");
        return ExitCode::FAILURE;
    };

    match hash_password(password) {
        Ok(hash) => {
            println!("{hash}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// The line without its terminator. Other whitespace belongs to the password.
fn password_from_line(line: &str) -> Option<&str> {
    Some(line.trim_end_matches(['\r', '\n'])).filter(|p| !p.is_empty())
}

#[cfg(test)]
mod tests {
    use api::auth::verify_password;

    use super::*;

    #[test]
    fn test_line_terminator_is_not_hashed() {
        let password = password_from_line(" pass word \r\n").unwrap();
        assert_eq!(password, " pass word ");

        let hash = hash_password(password).unwrap();
        assert!(verify_password(" pass word ", &hash).unwrap());
        assert!(!verify_password(" pass word \n", &hash).unwrap());
    }

    #[test]
    fn test_empty_input_rejected() {
        assert_eq!(password_from_line("\n"), None);
        assert_eq!(password_from_line(""), None);
    }
}
