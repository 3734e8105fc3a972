//! The MOJiTalk string catalog.
//!
//! Each row lists the texts in [`SUPPORTED_LOCALES`] order: `zh-Hans`, `en`, `ja`, `ko`.

use crate::{
    config::SUPPORTED_LOCALES,
    types::{LocaleCode, TranslationEntry, TranslationKey, TranslationTable},
};

const CATALOG: &[(&str, [&str; 4])] = &[
    // Login
    (
        "login.title",
        [
            "MOJiTalk",
            "MOJiTalk",
            "MOJiTalk",
            "MOJiTalk",
        ],
    ),
    (
        "login.subtitle",
        [
            "沉浸式日语口语对话",
            "Immersive Japanese Conversation",
            "没入型日本語会話",
            "몰입형 일본어 회화",
        ],
    ),
    (
        "login.email.placeholder",
        [
            "请输入注册邮箱",
            "Enter your email",
            "メールアドレスを入力",
            "이메일을 입력하세요",
        ],
    ),
    (
        "login.otp.placeholder",
        [
            "请输入 6 位验证码",
            "Enter 6-digit code",
            "6桁のコードを入力",
            "6자리 코드 입력",
        ],
    ),
    (
        "login.button.getCode",
        [
            "获取验证码",
            "Get Code",
            "コードを取得",
            "코드 받기",
        ],
    ),
    (
        "login.button.verify",
        [
            "验证并登录",
            "Verify & Login",
            "確認してログイン",
            "확인 및 로그인",
        ],
    ),
    (
        "login.button.back",
        [
            "返回输入邮箱",
            "Back to Email",
            "メール入力に戻る",
            "이메일 입력으로 돌아가기",
        ],
    ),
    (
        "login.divider.or",
        [
            "或",
            "or",
            "または",
            "또는",
        ],
    ),
    (
        "login.terms.agree",
        [
            "登录即代表您已同意",
            "By logging in, you agree to our",
            "ログインすることで、以下に同意したことになります",
            "로그인하면 다음에 동의하게 됩니다",
        ],
    ),
    (
        "login.terms.service",
        [
            "《用户协议》",
            "Terms of Service",
            "利用規約",
            "이용약관",
        ],
    ),
    (
        "login.terms.and",
        [
            "与",
            "and",
            "と",
            "및",
        ],
    ),
    (
        "login.terms.privacy",
        [
            "《隐私政策》",
            "Privacy Policy",
            "プライバシーポリシー",
            "개인정보 처리방침",
        ],
    ),
    (
        "login.error.title",
        [
            "登录失败",
            "Login Failed",
            "ログイン失敗",
            "로그인 실패",
        ],
    ),
    (
        "login.error.unknown",
        [
            "发生未知错误",
            "An unknown error occurred",
            "不明なエラーが発生しました",
            "알 수 없는 오류가 발생했습니다",
        ],
    ),
    (
        "login.stats.prefix",
        [
            "已累计产生",
            "Total practice sessions:",
            "累計練習回数：",
            "누적 연습 횟수:",
        ],
    ),
    (
        "login.stats.suffix",
        [
            "次练习",
            "",
            "回",
            "회",
        ],
    ),
    (
        "login.welcome.1",
        [
            "Ready to learn!",
            "Ready to learn!",
            "学習を始めましょう！",
            "학습을 시작하세요!",
        ],
    ),
    (
        "login.welcome.2",
        [
            "欢迎使用可呆口语！",
            "Welcome to MOJiTalk!",
            "MOJiTalkへようこそ！",
            "MOJiTalk에 오신 것을 환영합니다!",
        ],
    ),
    (
        "login.welcome.3",
        [
            "日本語を話しましょう！",
            "Let's speak Japanese!",
            "日本語を話しましょう！",
            "일본어를 말해봅시다!",
        ],
    ),
    (
        "login.welcome.4",
        [
            "Let's practice together!",
            "Let's practice together!",
            "一緒に練習しましょう！",
            "함께 연습해요!",
        ],
    ),
    (
        "login.welcome.5",
        [
            "一緒に頑張りましょう！",
            "Let's do our best!",
            "一緒に頑張りましょう！",
            "함께 힘내요!",
        ],
    ),

    // Login help
    (
        "loginHelp.title",
        [
            "登录帮助",
            "Login Help",
            "ログインヘルプ",
            "로그인 도움말",
        ],
    ),
    (
        "loginHelp.subtitle",
        [
            "遇到登录问题？查看以下常见解决方案",
            "Having trouble logging in? Check these common solutions",
            "ログインに問題がありますか？よくある解決策をご確認ください",
            "로그인에 문제가 있나요? 일반적인 해결 방법을 확인하세요",
        ],
    ),
    (
        "loginHelp.stillNeedHelp",
        [
            "仍需帮助？",
            "Still need help?",
            "まだサポートが必要ですか？",
            "여전히 도움이 필요하신가요?",
        ],
    ),
    (
        "loginHelp.contactSupport",
        [
            "联系客服",
            "Contact Support",
            "サポートに連絡",
            "고객 지원 문의",
        ],
    ),
    (
        "loginHelp.faq1.question",
        [
            "收不到验证码怎么办？",
            "Not receiving verification code?",
            "確認コードが届きませんか？",
            "인증 코드를 받지 못했나요?",
        ],
    ),
    (
        "loginHelp.faq1.answer",
        [
            "1. 请检查邮箱地址是否正确\n2. 查看垃圾邮件文件夹\n3. 等待 1-2 分钟后重试\n4. 如仍未收到，请联系客服",
            "1. Check if email address is correct\n2. Check spam folder\n3. Wait 1-2 minutes and retry\n4. Contact support if still not received",
            "1. メールアドレスが正しいか確認してください\n2. 迷惑メールフォルダを確認してください\n3. 1〜2分待ってから再試行してください\n4. それでも届かない場合はサポートにお問い合わせください",
            "1. 이메일 주소가 올바른지 확인하세요\n2. 스팸 폴더를 확인하세요\n3. 1-2분 기다린 후 다시 시도하세요\n4. 여전히 받지 못한 경우 고객 지원에 문의하세요",
        ],
    ),
    (
        "loginHelp.faq2.question",
        [
            "Apple 登录失败？",
            "Apple Sign In failed?",
            "Appleサインインに失敗しましたか？",
            "Apple 로그인 실패?",
        ],
    ),
    (
        "loginHelp.faq2.answer",
        [
            "1. 确保您的设备已登录 Apple ID\n2. 检查网络连接是否正常\n3. 在设置中允许 MOJiTalk 使用 Apple 登录\n4. 重启应用后重试",
            "1. Ensure your device is signed in with Apple ID\n2. Check network connection\n3. Allow MOJiTalk to use Apple Sign In in Settings\n4. Restart app and retry",
            "1. デバイスがApple IDでサインインしていることを確認してください\n2. ネットワーク接続を確認してください\n3. 設定でMOJiTalkがAppleサインインを使用することを許可してください\n4. アプリを再起動して再試行してください",
            "1. 기기가 Apple ID로 로그인되어 있는지 확인하세요\n2. 네트워크 연결을 확인하세요\n3. 설정에서 MOJiTalk의 Apple 로그인 사용을 허용하세요\n4. 앱을 재시작한 후 다시 시도하세요",
        ],
    ),
    (
        "loginHelp.faq3.question",
        [
            "验证码过期了？",
            "Verification code expired?",
            "確認コードの有効期限が切れましたか？",
            "인증 코드가 만료되었나요?",
        ],
    ),
    (
        "loginHelp.faq3.answer",
        [
            "验证码有效期为 10 分钟。如果过期，请返回登录页重新获取新的验证码。",
            "Verification codes are valid for 10 minutes. If expired, return to login page and request a new code.",
            "確認コードの有効期限は10分です。期限切れの場合は、ログインページに戻って新しいコードを取得してください。",
            "인증 코드는 10분 동안 유효합니다. 만료된 경우 로그인 페이지로 돌아가 새 코드를 요청하세요.",
        ],
    ),
    (
        "loginHelp.faq4.question",
        [
            "如何切换账号？",
            "How to switch accounts?",
            "アカウントを切り替えるには？",
            "계정을 전환하는 방법은?",
        ],
    ),
    (
        "loginHelp.faq4.answer",
        [
            "在个人中心点击\"退出登录\"，然后使用新的邮箱或 Apple ID 登录即可。",
            "Tap \"Logout\" in Profile, then login with a new email or Apple ID.",
            "プロフィールで「ログアウト」をタップし、新しいメールまたはApple IDでログインしてください。",
            "프로필에서 \"로그아웃\"을 탭한 다음 새 이메일 또는 Apple ID로 로그인하세요.",
        ],
    ),
    (
        "loginHelp.faq5.question",
        [
            "忘记注册邮箱？",
            "Forgot registered email?",
            "登録したメールアドレスを忘れましたか？",
            "등록한 이메일을 잊어버렸나요?",
        ],
    ),
    (
        "loginHelp.faq5.answer",
        [
            "如果您使用 Apple 登录，可以在 Apple ID 设置中查看关联的邮箱。如果使用邮箱注册，请尝试常用邮箱地址。",
            "If you used Apple Sign In, check associated email in Apple ID settings. If registered with email, try your commonly used addresses.",
            "Appleサインインを使用した場合は、Apple ID設定で関連付けられたメールを確認してください。メールで登録した場合は、よく使用するメールアドレスを試してください。",
            "Apple 로그인을 사용한 경우 Apple ID 설정에서 연결된 이메일을 확인하세요. 이메일로 등록한 경우 자주 사용하는 이메일 주소를 시도하세요.",
        ],
    ),

    // Onboarding
    (
        "onboarding.step1.title",
        [
            "点击消息播放语音",
            "Tap to Play Audio",
            "メッセージをタップして音声を再生",
            "메시지를 탭하여 오디오 재생",
        ],
    ),
    (
        "onboarding.step1.desc",
        [
            "轻触任意消息气泡，即可听到 AI 老师的真人发音",
            "Tap any message bubble to hear AI teacher's native pronunciation",
            "メッセージバブルをタップすると、AIティーチャーのネイティブ発音が聞けます",
            "메시지 버블을 탭하면 AI 선생님의 원어민 발음을 들을 수 있습니다",
        ],
    ),
    (
        "onboarding.step2.title",
        [
            "长按查看翻译和语法",
            "Long Press for Translation",
            "長押しで翻訳と文法を表示",
            "길게 눌러 번역 보기",
        ],
    ),
    (
        "onboarding.step2.desc",
        [
            "长按消息气泡，可以查看中文翻译和详细的语法解析",
            "Long press message bubble to view translation and detailed grammar analysis",
            "メッセージバブルを長押しすると、翻訳と詳細な文法解析が表示されます",
            "메시지 버블을 길게 누르면 번역 및 상세한 문법 분석을 볼 수 있습니다",
        ],
    ),
    (
        "onboarding.step3.title",
        [
            "语音输入练习口语",
            "Voice Input Practice",
            "音声入力で会話練習",
            "음성 입력으로 회화 연습",
        ],
    ),
    (
        "onboarding.step3.desc",
        [
            "点击麦克风按钮，说出日语句子进行口语练习",
            "Tap microphone button and speak Japanese sentences for speaking practice",
            "マイクボタンをタップして日本語の文章を話し、会話練習をしましょう",
            "마이크 버튼을 탭하고 일본어 문장을 말하여 회화 연습을 하세요",
        ],
    ),
    (
        "onboarding.step4.title",
        [
            "与 Live2D 老师互动",
            "Interact with Live2D Teacher",
            "Live2Dティーチャーと対話",
            "Live2D 선생님과 상호작용",
        ],
    ),
    (
        "onboarding.step4.desc",
        [
            "AI 说话时，消息列表会自动收起，让您看到老师的表情和口型",
            "When AI speaks, message list auto-collapses to show teacher's expressions and lip sync",
            "AIが話すとき、メッセージリストが自動的に折りたたまれ、先生の表情と口の動きが見えます",
            "AI가 말할 때 메시지 목록이 자동으로 접혀 선생님의 표정과 입 모양을 볼 수 있습니다",
        ],
    ),
    (
        "onboarding.button.previous",
        [
            "上一步",
            "Previous",
            "前へ",
            "이전",
        ],
    ),
    (
        "onboarding.button.next",
        [
            "下一步",
            "Next",
            "次へ",
            "다음",
        ],
    ),
    (
        "onboarding.button.start",
        [
            "开始使用",
            "Get Started",
            "始める",
            "시작하기",
        ],
    ),
    (
        "onboarding.button.skip",
        [
            "跳过引导",
            "Skip",
            "スキップ",
            "건너뛰기",
        ],
    ),

    // Chat
    (
        "chat.input.placeholder",
        [
            "输入消息...",
            "Type a message...",
            "メッセージを入力...",
            "메시지 입력...",
        ],
    ),
    (
        "chat.loading",
        [
            "召唤中...",
            "Loading...",
            "読み込み中...",
            "로딩 중...",
        ],
    ),
    (
        "chat.menu.translate",
        [
            "翻译",
            "Translate",
            "翻訳",
            "번역",
        ],
    ),
    (
        "chat.menu.analyze",
        [
            "语法精讲",
            "Grammar Analysis",
            "文法解説",
            "문법 분석",
        ],
    ),
    (
        "chat.menu.report",
        [
            "举报",
            "Report",
            "報告",
            "신고",
        ],
    ),
    (
        "chat.menu.retry",
        [
            "重试",
            "Retry",
            "再試行",
            "재시도",
        ],
    ),

    // Profile
    (
        "profile.title",
        [
            "个人中心",
            "Profile",
            "プロフィール",
            "프로필",
        ],
    ),
    (
        "profile.autoPlayTTS",
        [
            "自动播放 TTS",
            "Auto Play TTS",
            "TTS自動再生",
            "TTS 자동 재생",
        ],
    ),
    (
        "profile.logout",
        [
            "退出登录",
            "Logout",
            "ログアウト",
            "로그아웃",
        ],
    ),
    (
        "profile.deleteAccount",
        [
            "永久注销账户",
            "Delete Account Permanently",
            "アカウントを完全に削除",
            "계정 영구 삭제",
        ],
    ),
    (
        "profile.delete.confirm.title",
        [
            "确认注销账户",
            "Confirm Account Deletion",
            "アカウント削除の確認",
            "계정 삭제 확인",
        ],
    ),
    (
        "profile.delete.confirm.message",
        [
            "此操作将永久删除您的账号及所有对话记录，且无法恢复。确定要继续吗？",
            "This will permanently delete your account and all conversation history. This cannot be undone. Continue?",
            "この操作により、アカウントとすべての会話履歴が完全に削除されます。元に戻すことはできません。続行しますか？",
            "이 작업은 계정과 모든 대화 기록을 영구적으로 삭제합니다. 취소할 수 없습니다. 계속하시겠습니까?",
        ],
    ),
    (
        "profile.delete.confirm.button",
        [
            "确认注销",
            "Confirm Delete",
            "削除を確認",
            "삭제 확인",
        ],
    ),

    // Common
    (
        "common.ok",
        [
            "确定",
            "OK",
            "OK",
            "확인",
        ],
    ),
    (
        "common.cancel",
        [
            "取消",
            "Cancel",
            "キャンセル",
            "취소",
        ],
    ),
    (
        "common.close",
        [
            "关闭",
            "Close",
            "閉じる",
            "닫기",
        ],
    ),
    (
        "common.loading",
        [
            "加载中...",
            "Loading...",
            "読み込み中...",
            "로딩 중...",
        ],
    ),
    (
        "common.error",
        [
            "错误",
            "Error",
            "エラー",
            "오류",
        ],
    ),
];

/// Builds the table shipped with the app.
pub fn builtin_table() -> TranslationTable {
    CATALOG
        .iter()
        .map(|(key, texts)| {
            let entry = SUPPORTED_LOCALES.iter().zip(texts).fold(
                TranslationEntry::new(),
                |entry, (locale, text)| entry.with_value(LocaleCode::new(*locale), *text),
            );
            (TranslationKey::new(*key), entry)
        })
        .collect()
}
