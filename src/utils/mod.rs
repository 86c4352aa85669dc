pub mod timezone;

pub use timezone::Timezone;
