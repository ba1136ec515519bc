//! External collaborators: price history, reasoning, and audio rendering.

pub mod coingecko;
pub mod elevenlabs;
pub mod openai;

pub use coingecko::CoinGeckoClient;
pub use elevenlabs::{MusicRenderClient, RenderedAudio};
pub use openai::OpenAiReasoningClient;
