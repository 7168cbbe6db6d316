//! Map curl failures onto the client error taxonomy.

use super::error::AnalyzeError;

/// A failure while configuring the handle: the request never left.
pub(crate) fn setup_error(e: curl::Error) -> AnalyzeError {
    tracing::debug!(code = e.code(), "request setup failed: {}", e);
    AnalyzeError::send_failed()
}

/// A failure raised by `perform`.
///
/// URL and protocol rejections happen before anything is sent. Everything
/// else (timeout, refused connection, DNS, reset, empty reply, TLS) means
/// the request was attempted and no response arrived.
pub(crate) fn perform_error(e: &curl::Error) -> AnalyzeError {
    if is_send_failure(e) {
        tracing::debug!(code = e.code(), "request could not be sent: {}", e);
        return AnalyzeError::send_failed();
    }
    if e.is_operation_timedout() {
        tracing::warn!("detector request timed out");
    } else {
        tracing::warn!(code = e.code(), "no response from detector: {}", e);
    }
    AnalyzeError::no_response()
}

fn is_send_failure(e: &curl::Error) -> bool {
    e.is_url_malformed()
        || e.is_unsupported_protocol()
        || e.is_failed_init()
        || e.is_bad_function_argument()
        || e.is_unknown_option()
        || e.is_out_of_memory()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ErrorKind;

    // libcurl CURLcode values.
    const UNSUPPORTED_PROTOCOL: u32 = 1;
    const URL_MALFORMAT: u32 = 3;
    const COULDNT_RESOLVE_HOST: u32 = 6;
    const COULDNT_CONNECT: u32 = 7;
    const OPERATION_TIMEDOUT: u32 = 28;
    const GOT_NOTHING: u32 = 52;
    const RECV_ERROR: u32 = 56;

    #[test]
    fn timeouts_and_connect_failures_are_network() {
        for code in [
            OPERATION_TIMEDOUT,
            COULDNT_CONNECT,
            COULDNT_RESOLVE_HOST,
            GOT_NOTHING,
            RECV_ERROR,
        ] {
            let e = curl::Error::new(code);
            assert_eq!(perform_error(&e).kind(), ErrorKind::Network, "code {code}");
        }
    }

    #[test]
    fn malformed_url_is_client() {
        let e = curl::Error::new(URL_MALFORMAT);
        assert_eq!(perform_error(&e).kind(), ErrorKind::Client);
        let e = curl::Error::new(UNSUPPORTED_PROTOCOL);
        assert_eq!(perform_error(&e).kind(), ErrorKind::Client);
    }

    #[test]
    fn setup_is_always_client() {
        let e = curl::Error::new(COULDNT_CONNECT);
        assert_eq!(setup_error(e).kind(), ErrorKind::Client);
    }
}
