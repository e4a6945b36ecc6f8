#[cfg(test)]
mod common_tests {
    mod budget_tests {
        use std::time::{Duration, Instant};
        use crate::common::common::remaining_budget;

        #[test]
        fn test_remaining_budget_never_underflows() {
            let started = Instant::now() - Duration::from_secs(10);
            assert_eq!(remaining_budget(started, Duration::from_secs(1)), Duration::ZERO);
        }

        #[test]
        fn test_remaining_budget_fresh() {
            let remaining = remaining_budget(Instant::now(), Duration::from_secs(60));
            assert!(remaining > Duration::from_secs(59));
        }
    }

    mod subsequence_tests {
        use crate::common::common::find_subsequence;

        #[test]
        fn test_find_header_terminator() {
            let data = b"HTTP/1.0 200 OK\r\nContent-Length: 2\r\n\r\nhi";
            assert_eq!(find_subsequence(data, b"\r\n\r\n"), Some(34));
        }

        #[test]
        fn test_find_missing() {
            assert_eq!(find_subsequence(b"HTTP/1.0 200", b"\r\n\r\n"), None);
        }
    }

    mod error_tests {
        use crate::common::enums::mogile_error::MogileError;

        #[test]
        fn test_unreachable_backend_display() {
            let error = MogileError::UnreachableBackend;
            assert_eq!(format!("{}", error), "couldn't connect to mogilefsd backend");
        }

        #[test]
        fn test_request_truncated_display() {
            let error = MogileError::RequestTruncated { sent: 3, expected: 4 };
            assert_eq!(format!("{}", error), "request truncated (sent 3 expected 4)");
        }

        #[test]
        fn test_unreadable_socket_display() {
            let error = MogileError::UnreadableSocket(String::from("127.0.0.1:7001"));
            assert_eq!(format!("{}", error), "127.0.0.1:7001 never became readable");
        }

        #[test]
        fn test_tracker_error_tag() {
            let error = MogileError::tracker("unknown_key", "some message");
            assert_eq!(error.tag(), Some("unknown_key"));
            assert!(error.is_tracker_error("unknown_key"));
            assert!(!error.is_tracker_error("dup"));
            assert_eq!(format!("{}", error), "UnknownKeyError: some message");
        }

        #[test]
        fn test_non_tracker_error_has_no_tag() {
            assert_eq!(MogileError::ReadOnly.tag(), None);
            assert!(MogileError::ReadOnly.kind().is_none());
        }

        #[test]
        fn test_retryable_read() {
            assert!(MogileError::Timeout(String::from("GET")).is_retryable_read());
            assert!(MogileError::InvalidResponse(String::from("x")).is_retryable_read());
            assert!(!MogileError::ReadOnly.is_retryable_read());
        }
    }
}
