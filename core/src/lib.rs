pub mod action;
pub mod board;
pub mod contact;
pub mod relay;
pub mod skills;
pub mod state;

pub use action::PuzzleAction;
pub use board::{Board, PuzzleImage, Quadrant, Side, Tile, TileSlot, GRID_COLS, TILE_COUNT};
pub use contact::{
    screen, validate_field, ContactField, ContactForm, ContactPayload, OutboundEmail, Screening,
    Submission, ValidationError,
};
pub use relay::{
    ConfigError, ContactError, ContactRelay, Mailer, MailerError, MailerReply, RelayConfig,
    RelayOutcome, RelayReply, ReplyBody, RequestMethod, CORS_HEADERS,
};
pub use skills::{group_by_category, Skill, SkillCategory, SKILLS};
pub use state::{ActionOutcome, PuzzleState};
