//! Состояние страницы генерации.
//!
//! Every submit takes a [`RequestTicket`]; a completion is applied only if its
//! ticket is still the latest one, so a late or repeated response can never
//! overwrite the result of a later submission.

/// Статус текущего запроса. Error и image взаимоисключающие и оба
/// отсутствуют во время загрузки.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Failed(String),
    /// Data URI готового изображения
    Ready(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

#[derive(Debug, Clone, Default)]
pub struct StudioState {
    status: RequestStatus,
    latest: u64,
}

impl StudioState {
    /// Начать новый запрос: сбрасывает error/image и выдаёт ticket.
    /// `None` for an empty prompt or while a request is already in flight.
    pub fn begin(&mut self, prompt: &str) -> Option<RequestTicket> {
        if prompt.is_empty() || self.is_loading() {
            return None;
        }
        self.latest += 1;
        self.status = RequestStatus::Loading;
        Some(RequestTicket(self.latest))
    }

    /// Применить результат запроса. Returns `false` (and leaves the state
    /// untouched) when the ticket has been superseded.
    pub fn finish(&mut self, ticket: RequestTicket, result: Result<String, String>) -> bool {
        if ticket.0 != self.latest || self.status != RequestStatus::Loading {
            return false;
        }
        self.status = match result {
            Ok(data_uri) => RequestStatus::Ready(data_uri),
            Err(message) => RequestStatus::Failed(message),
        };
        true
    }

    pub fn status(&self) -> &RequestStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == RequestStatus::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            RequestStatus::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn image_url(&self) -> Option<&str> {
        match &self.status {
            RequestStatus::Ready(url) => Some(url),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let state = StudioState::default();
        assert_eq!(state.status(), &RequestStatus::Idle);
        assert!(!state.is_loading());
        assert_eq!(state.error(), None);
        assert_eq!(state.image_url(), None);
    }

    #[test]
    fn test_success_flow() {
        let mut state = StudioState::default();
        let ticket = state.begin("A cat").unwrap();
        assert!(state.is_loading());

        assert!(state.finish(ticket, Ok("data:image/png;base64,AAAA".to_string())));
        assert_eq!(state.image_url(), Some("data:image/png;base64,AAAA"));
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_empty_prompt_does_not_start() {
        let mut state = StudioState::default();
        assert_eq!(state.begin(""), None);
        assert_eq!(state.status(), &RequestStatus::Idle);
    }

    #[test]
    fn test_no_second_request_while_loading() {
        let mut state = StudioState::default();
        let first = state.begin("A cat").unwrap();
        assert_eq!(state.begin("A dog"), None);
        assert!(state.is_loading());

        // Первый запрос по-прежнему актуален
        assert!(state.finish(first, Ok("data:image/png;base64,AAAA".to_string())));
        assert_eq!(state.image_url(), Some("data:image/png;base64,AAAA"));
    }

    #[test]
    fn test_begin_clears_previous_result() {
        let mut state = StudioState::default();
        let ticket = state.begin("A cat").unwrap();
        state.finish(ticket, Err("bad prompt".to_string()));
        assert_eq!(state.error(), Some("bad prompt"));

        assert!(state.begin("A cat").is_some());
        assert!(state.is_loading());
        assert_eq!(state.error(), None);
        assert_eq!(state.image_url(), None);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = StudioState::default();
        let first = state.begin("A cat").unwrap();
        assert!(state.finish(first, Err("timeout".to_string())));

        let second = state.begin("A cat").unwrap();
        // Повторный ответ на первый запрос не трогает новый
        assert!(!state.finish(first, Ok("data:image/png;base64,OLD".to_string())));
        assert!(state.is_loading());

        assert!(state.finish(second, Ok("data:image/png;base64,NEW".to_string())));
        assert_eq!(state.image_url(), Some("data:image/png;base64,NEW"));
    }

    #[test]
    fn test_ticket_applies_once() {
        let mut state = StudioState::default();
        let ticket = state.begin("A cat").unwrap();
        assert!(state.finish(ticket, Err("boom".to_string())));
        assert!(!state.finish(ticket, Ok("data:image/png;base64,AAAA".to_string())));
        assert_eq!(state.error(), Some("boom"));
    }
}
