// Copyright (c) 2026 Fopbook Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod user;
pub mod profile;
pub mod income;
pub mod rates;
pub mod summary;
pub mod exporter;
pub mod doctor;
