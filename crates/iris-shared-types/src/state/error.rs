/// The error message shown in the UI
///
/// Holds at most one message, a new error replaces the current one.
/// It stays visible until it is explicitly closed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMsg {
    msg: Option<String>,
}

impl ErrorMsg {
    /// Show an ErrorMsg
    ///
    /// The error modal paints it on the next frame
    pub fn show<T>(&mut self, msg: T) where T: ToString {
        self.msg = Some(msg.to_string());
    }

    /// Close the ErrorMsg, closing an already closed message does nothing
    pub fn close(&mut self) {
        self.msg = None;
    }

    pub fn is_open(&self) -> bool {
        self.msg.is_some()
    }

    pub fn msg(&self) -> Option<&str> {
        self.msg.as_deref()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_then_close() {
        let mut err = ErrorMsg::default();
        assert!(!err.is_open());

        err.show("Insufficient balance");
        assert_eq!(err.msg(), Some("Insufficient balance"));

        err.show(String::from("Route not found"));
        assert_eq!(err.msg(), Some("Route not found"));

        err.close();
        assert!(!err.is_open());
        err.close();
        assert_eq!(err, ErrorMsg::default());
    }
}
