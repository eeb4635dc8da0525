// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

// Headers used by SAuthc1.
pub const X_STORMPATH_DATE: &str = "x-stormpath-date";

// Literals of the SAuthc1 scheme.
pub const SAUTHC1_ALGORITHM: &str = "HMAC-SHA-256";
pub const SAUTHC1_KEY_PREFIX: &str = "SAuthc1";
pub const SAUTHC1_TERMINATOR: &str = "sauthc1_request";
pub const SAUTHC1_ID: &str = "sauthc1Id";
pub const SAUTHC1_SIGNED_HEADERS: &str = "sauthc1SignedHeaders";
pub const SAUTHC1_SIGNATURE: &str = "sauthc1Signature";

// Env values used by stormpath clients.
pub const STORMPATH_CLIENT_APIKEY_ID: &str = "STORMPATH_CLIENT_APIKEY_ID";
pub const STORMPATH_CLIENT_APIKEY_SECRET: &str = "STORMPATH_CLIENT_APIKEY_SECRET";
pub const STORMPATH_CLIENT_APIKEY_FILE: &str = "STORMPATH_CLIENT_APIKEY_FILE";

// Properties of an `apiKey.properties` file.
pub const DEFAULT_APIKEY_FILE: &str = "~/.stormpath/apiKey.properties";
pub const APIKEY_ID_PROPERTY: &str = "apiKey.id";
pub const APIKEY_SECRET_PROPERTY: &str = "apiKey.secret";

/// AsciiSet for SAuthc1 path encoding.
///
/// - Encode every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', '~'
///   and the path separator '/'.
pub static SAUTHC1_PATH_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// AsciiSet for SAuthc1 query encoding.
///
/// Same as [`SAUTHC1_PATH_ENCODE_SET`] but '/' is encoded as well.
pub static SAUTHC1_QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
