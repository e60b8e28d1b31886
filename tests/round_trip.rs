use modelfile::prelude::*;

fn vertex(seed: f32) -> VertexTex2 {
    VertexTex2 {
        coord: Vector3::from([seed, seed * 0.5, -seed]),
        normal: Vector3::from([0.0, 1.0, 0.0]),
        tex_coord: Vector2::from([0.125, seed / 100.0]),
        tex_coord2: Vector2::from([0.75, 0.1]),
    }
}

fn triangle(i: usize) -> ModelTriangle {
    let seed = i as f32 + 0.3;
    ModelTriangle {
        p1: vertex(seed),
        p2: vertex(seed + 1.0),
        p3: vertex(seed + 2.0),
        material: Material {
            diffuse: Color::from([0.9, 0.8, 0.7, 1.0]),
            ambient: Color::from([0.1, 0.2, 0.3, 0.0]),
            specular: Color::from([1.0 / 3.0, 0.0, 0.0, 0.5]),
        },
        tex1_name: format!("tex{}.png", i),
        tex2_name: if i % 2 == 0 { "dirty04.png".to_string() } else { String::new() },
        variable_tex2: i % 3 == 0,
        min: 0.0,
        max: 100.0 * (i + 1) as f32,
        state: RenderState::from_bits(i as u32) | RenderState::TWO_FACE,
    }
}

fn model(n: usize) -> ModelFile {
    let mut model = ModelFile::new();
    for i in 0..n {
        model.push(triangle(i));
    }
    model
}

#[test]
fn binary_round_trip() {
    for n in [1, 17] {
        let original = model(n);
        let mut buffer = Vec::new();
        original.write_binary_model(&mut buffer).unwrap();

        let mut read = ModelFile::new();
        read.read_binary_model(buffer.as_slice()).unwrap();
        assert_eq!(read.get_triangles(), original.get_triangles());
    }
}

#[test]
fn binary_layout() {
    let original = model(1);
    let mut buffer = Vec::new();
    original.write_binary_model(&mut buffer).unwrap();
    let t = &original.get_triangles()[0];
    let expected_len = 8
        + 3 * 40
        + 12 * 4
        + 1 + t.tex1_name.len()
        + 1 + t.tex2_name.len()
        + 1 + 4 + 4 + 4;
    assert_eq!(buffer.len(), expected_len);
    assert_eq!(&buffer[..8], &[1, 0, 0, 0, 1, 0, 0, 0]);
}

#[test]
fn text_round_trip() {
    for n in [1, 17] {
        let original = model(n);
        let mut buffer = Vec::new();
        original.write_text_model(&mut buffer).unwrap();

        let mut read = ModelFile::new();
        read.read_text_model(buffer.as_slice()).unwrap();
        assert_eq!(read.get_triangles(), original.get_triangles());
    }
}

#[test]
fn text_tolerates_comments_and_blank_lines() {
    let mut buffer = Vec::new();
    model(2).write_text_model(&mut buffer).unwrap();
    let text = String::from_utf8(buffer).unwrap()
        .replace("\ntex1 ", "\n# a comment\n\n   \ntex1 ");

    let mut read = ModelFile::new();
    read.read_text_model(text.as_bytes()).unwrap();
    assert_eq!(read.get_triangles(), model(2).get_triangles());
}

#[test]
fn unknown_version_is_rejected() {
    let mut buffer = Vec::new();
    model(1).write_text_model(&mut buffer).unwrap();
    let text = String::from_utf8(buffer).unwrap().replace("version 1", "version 2");
    let mut read = model(3);
    assert!(read.read_text_model(text.as_bytes()).is_err());
    assert!(read.is_empty());

    let mut buffer = Vec::new();
    model(1).write_binary_model(&mut buffer).unwrap();
    buffer[..4].copy_from_slice(&7_i32.to_le_bytes());
    let mut read = model(3);
    assert!(read.read_binary_model(buffer.as_slice()).is_err());
    assert!(read.is_empty());
}

#[test]
fn truncated_streams_leave_model_empty() {
    let original = model(3);

    let mut buffer = Vec::new();
    original.write_binary_model(&mut buffer).unwrap();
    buffer.truncate(buffer.len() - 1);
    let mut read = model(1);
    assert!(read.read_binary_model(buffer.as_slice()).is_err());
    assert!(read.is_empty());

    let mut buffer = Vec::new();
    original.write_model(&mut buffer).unwrap();
    buffer.truncate(buffer.len() / 2);
    let mut read = model(1);
    assert!(read.read_model(buffer.as_slice()).is_err());
    assert!(read.is_empty());

    let mut buffer = Vec::new();
    original.write_text_model(&mut buffer).unwrap();
    let text = String::from_utf8(buffer).unwrap();
    let cut = text.rfind("state").unwrap();
    let mut read = model(1);
    assert!(read.read_text_model(text[..cut].as_bytes()).is_err());
    assert!(read.is_empty());
}

#[test]
fn legacy_round_trip() {
    let mut original = model(5);
    for t in original.get_triangles_mut().iter_mut() {
        // legacy files only keep what the overlay index can express
        if t.variable_tex2 {
            t.tex2_name.clear();
        } else if !t.tex2_name.is_empty() {
            t.state |= RenderState::DUAL_BLACK;
        }
    }
    let mut buffer = Vec::new();
    original.write_model(&mut buffer).unwrap();

    let mut read = ModelFile::new();
    read.read_model(buffer.as_slice()).unwrap();
    assert_eq!(read.get_triangles(), original.get_triangles());
}

#[test]
fn legacy_round_trip_variable_texture() {
    let mut original = ModelFile::new();
    original.push(ModelTriangle {
        tex1_name: "wall.png".to_string(),
        variable_tex2: true,
        max: 100.0,
        ..Default::default()
    });
    let mut buffer = Vec::new();
    original.write_model(&mut buffer).unwrap();

    let mut read = ModelFile::new();
    read.read_model(buffer.as_slice()).unwrap();
    let t = &read.get_triangles()[0];
    assert!(t.variable_tex2);
    assert_eq!(t.tex2_name, "");
    assert_eq!(t.state, RenderState::NORMAL);
}

#[test]
fn file_round_trip() {
    let dir = std::env::temp_dir();
    let original = model(4);
    for (format, name) in [
        (Format::Binary, "modelfile-round-trip.mod"),
        (Format::Text, "modelfile-round-trip.txt"),
    ] {
        let path = dir.join(name);
        format.write_file(&original, &path).unwrap();
        let mut read = ModelFile::new();
        format.read_file(&mut read, &path).unwrap();
        assert_eq!(read.get_triangles(), original.get_triangles());
        std::fs::remove_file(&path).unwrap();
    }
}

#[test]
fn empty_model_file_is_not_created() {
    let path = std::env::temp_dir().join("modelfile-empty.mod");
    let _ = std::fs::remove_file(&path);
    assert!(ModelFile::new().write_binary_model_file(&path).is_err());
    assert!(!path.exists());
}
