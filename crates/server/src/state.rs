use std::sync::Arc;

use service::books::repo::seaorm::SeaOrmBookRepository;
use service::books::BookService;
use service::users::repo::seaorm::SeaOrmUserRepository;
use service::users::UserService;

/// Shared handler state: the two resource services, constructed once at
/// startup. Handlers hold no other shared state.
#[derive(Clone)]
pub struct ServerState {
    pub users: Arc<UserService<SeaOrmUserRepository>>,
    pub books: Arc<BookService<SeaOrmBookRepository>>,
}
