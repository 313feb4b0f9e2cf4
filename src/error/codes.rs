#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    InvalidArguments = 1,
    FilesystemError = 2,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success as i32, 0);
        assert_eq!(ExitCode::InvalidArguments as i32, 1);
        assert_eq!(ExitCode::FilesystemError as i32, 2);
    }

    #[test]
    fn test_exit_code_into_i32() {
        let code: i32 = ExitCode::FilesystemError.into();
        assert_eq!(code, 2);
    }
}
