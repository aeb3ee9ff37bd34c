// Copyright (c) 2022 MASSA LABS <info@massa.net>

mod tools;

pub use tools::*;
