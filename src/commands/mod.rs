// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod add;
pub mod chart;
pub mod configure;
pub mod delete;
pub mod edit;
pub mod exporter;
pub mod list;
pub mod summary;
