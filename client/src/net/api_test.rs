use super::*;

#[test]
fn student_endpoint_formats_expected_path() {
    assert_eq!(student_endpoint(42), "/api/v1/students/42");
}

#[test]
fn status_error_decodes_backend_body() {
    let err = status_error(
        400,
        r#"{"message":"Email ada@example.com taken","status":400,"error":"Bad Request"}"#,
    );
    assert_eq!(
        err.notification_message(),
        "Email ada@example.com taken [400] [Bad Request]"
    );
}

#[test]
fn status_error_with_html_body_falls_back_to_status() {
    let err = status_error(502, "<html>bad gateway</html>");
    assert_eq!(
        err.notification_message(),
        "request failed with status 502 [502] [Bad Gateway]"
    );
}

#[test]
fn status_error_prefers_body_status_over_transport_status() {
    let err = status_error(500, r#"{"message":"gone","status":404,"error":"Not Found"}"#);
    assert_eq!(err.notification_message(), "gone [404] [Not Found]");
}

#[test]
fn network_error_message_is_display_text() {
    let err = ApiError::Network("offline".to_owned());
    assert_eq!(err.notification_message(), "request failed: offline");
}

#[test]
fn status_reason_has_fallback() {
    assert_eq!(status_reason(404), "Not Found");
    assert_eq!(status_reason(418), "Error");
}

#[cfg(not(feature = "hydrate"))]
mod server_stubs {
    use super::*;
    use crate::net::types::Gender;

    fn block_on<F: std::future::Future>(fut: F) -> F::Output {
        let waker = std::task::Waker::noop();
        let mut cx = std::task::Context::from_waker(waker);
        let mut fut = std::pin::pin!(fut);
        match fut.as_mut().poll(&mut cx) {
            std::task::Poll::Ready(out) => out,
            std::task::Poll::Pending => panic!("stub future should resolve immediately"),
        }
    }

    #[test]
    fn calls_are_unavailable_outside_browser() {
        assert_eq!(block_on(fetch_students()), Err(ApiError::Unavailable));
        assert_eq!(block_on(delete_student(1)), Err(ApiError::Unavailable));
        let student = Student {
            id: 1,
            name: "A".to_owned(),
            email: "a@x.io".to_owned(),
            gender: Gender::Male,
        };
        assert_eq!(block_on(edit_student(&student)), Err(ApiError::Unavailable));
        let new_student = NewStudent {
            name: "A".to_owned(),
            email: "a@x.io".to_owned(),
            gender: Gender::Male,
        };
        assert_eq!(block_on(add_student(&new_student)), Err(ApiError::Unavailable));
    }
}
