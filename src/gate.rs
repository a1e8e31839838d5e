// src/gate.rs
use std::io::BufRead;

/// Token the operator must type verbatim before any tool is invoked.
pub const AUTHORIZATION_TOKEN: &str = "I_HAVE_PERMISSION";

/// Authorization gate. Blocks on one line of input and proceeds only on an
/// exact, case-sensitive match of the token after trimming surrounding
/// whitespace. This is a policy gate, not a security control.
pub fn confirm_authorization<R: BufRead>(input: &mut R) -> std::io::Result<bool> {
    println!("Authorization check: you MUST have explicit permission to test this target.");
    println!("Type {} to continue: ", AUTHORIZATION_TOKEN);

    let mut line = String::new();
    let read = input.read_line(&mut line)?;
    if read == 0 {
        // EOF before any acknowledgment
        return Ok(false);
    }

    Ok(line.trim() == AUTHORIZATION_TOKEN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn exact_token_is_accepted() {
        let mut input = Cursor::new("I_HAVE_PERMISSION\n");
        assert!(confirm_authorization(&mut input).unwrap());
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let mut input = Cursor::new("  I_HAVE_PERMISSION  \n");
        assert!(confirm_authorization(&mut input).unwrap());
    }

    #[test]
    fn anything_else_is_denied() {
        for bad in ["", "no", "i_have_permission", "I HAVE PERMISSION", "I_HAVE_PERMISSION extra"] {
            let mut input = Cursor::new(format!("{}\n", bad));
            assert!(!confirm_authorization(&mut input).unwrap(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn eof_is_denied() {
        let mut input = Cursor::new("");
        assert!(!confirm_authorization(&mut input).unwrap());
    }
}
