use std::hash::{DefaultHasher, Hash, Hasher};

////////////////////////////////////////////////////////////////////////////////

pub fn hash_one(value: &impl Hash) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}
