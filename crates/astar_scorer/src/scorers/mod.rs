mod chebyshev;
mod checked;
mod euclidean;
mod haversine;
mod manhattan;
mod max;
mod scaled;

pub use chebyshev::Chebyshev;
pub use checked::Checked;
pub use euclidean::Euclidean;
pub use haversine::Haversine;
pub use manhattan::Manhattan;
pub use max::MaxOf;
pub use scaled::Scaled;
